//! Network utilities for talking to the catalog API.
//!
//! This module provides the authenticated session shared by the catalog
//! client: base URL resolution and API key injection on every request.

mod session;

pub use session::{redact_api_key, ApiSession};
