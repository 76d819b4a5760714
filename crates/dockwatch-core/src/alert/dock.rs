/// Normalize a raw dock label from the sheet into the standard form.
///
/// Total function, every input maps to something renderable:
/// - blank or "-" placeholders become the generic "Doca --" marker
/// - "EXT.OUT" external labels keep only their digits under the standard
///   label ("EXT.OUT123" -> "Doca 123")
/// - labels already carrying "Doca" pass through unchanged
/// - anything else gets the standard label prefixed ("7" -> "Doca 7")
pub fn normalize_dock(raw: &str) -> String {
    let dock = raw.trim();
    if dock.is_empty() || dock == "-" {
        "Doca --".to_string()
    } else if dock.starts_with("EXT.OUT") {
        let digits: String = dock.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("Doca {digits}")
    } else if dock.starts_with("Doca") {
        dock.to_string()
    } else {
        format!("Doca {dock}")
    }
}
