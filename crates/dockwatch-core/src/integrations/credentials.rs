//! Sheet credential decoding.
//!
//! The credential env var carries a JSON document, either raw or wrapped in
//! base64 (the wrapped form survives CI secret stores that mangle newlines).
//! Raw JSON is tried first; only when both decodings fail is the value
//! rejected.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;
use tracing::debug;

use crate::config;
use crate::error::{CoreError, CredentialError};

/// Decoded credentials for the sheet API.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetCredentials {
    /// Bearer token presented to the values endpoint.
    pub access_token: String,
}

/// Decode a raw env var value into credentials.
pub fn decode(raw: &str) -> Result<SheetCredentials, CredentialError> {
    if let Ok(creds) = serde_json::from_str::<SheetCredentials>(raw) {
        debug!("credentials decoded from plain JSON");
        return Ok(creds);
    }

    let bytes = STANDARD
        .decode(raw.trim())
        .map_err(|e| CredentialError::Undecodable(e.to_string()))?;
    let text =
        String::from_utf8(bytes).map_err(|e| CredentialError::Undecodable(e.to_string()))?;
    let creds = serde_json::from_str::<SheetCredentials>(&text)
        .map_err(|e| CredentialError::Undecodable(e.to_string()))?;
    debug!("credentials decoded from base64-wrapped JSON");
    Ok(creds)
}

/// Read and decode credentials from [`config::ENV_SHEET_CREDENTIALS`].
pub fn from_env() -> Result<SheetCredentials, CoreError> {
    let raw = config::require_env(config::ENV_SHEET_CREDENTIALS)?;
    Ok(decode(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_json() {
        let creds = decode(r#"{"access_token": "ya29.secret"}"#).unwrap();
        assert_eq!(creds.access_token, "ya29.secret");
    }

    #[test]
    fn decodes_base64_wrapped_json() {
        let encoded = STANDARD.encode(r#"{"access_token": "ya29.secret"}"#);
        let creds = decode(&encoded).unwrap();
        assert_eq!(creds.access_token, "ya29.secret");
    }

    #[test]
    fn base64_with_surrounding_whitespace_is_accepted() {
        let encoded = format!("  {}\n", STANDARD.encode(r#"{"access_token": "t"}"#));
        assert_eq!(decode(&encoded).unwrap().access_token, "t");
    }

    #[test]
    fn rejects_values_that_are_neither() {
        assert!(matches!(
            decode("definitely not credentials!"),
            Err(CredentialError::Undecodable(_))
        ));
    }

    #[test]
    fn rejects_base64_of_non_json() {
        let encoded = STANDARD.encode("still not json");
        assert!(matches!(
            decode(&encoded),
            Err(CredentialError::Undecodable(_))
        ));
    }
}
