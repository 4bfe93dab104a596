//! Browser network layer: backend JSON client and geolocation helper.
//!
//! Everything here runs on the page's event loop via `fetch` and the
//! browser geolocation API. No retries and no timeouts; callers log
//! failures and degrade.

pub mod client;
pub mod geolocation;
