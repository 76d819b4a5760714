//! Clients for the external collaborators: the spreadsheet that feeds
//! pending departures and the chat webhook that receives the alert.
//!
//! Everything async and fallible lives here; the alert engine never touches
//! the network.

pub mod credentials;
pub mod sheets;
pub mod webhook;
