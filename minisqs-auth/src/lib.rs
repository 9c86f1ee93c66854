//! Request signing for minisqs
//!
//! Implements AWS Signature Version 4 for outbound queue requests.

pub mod sigv4;

pub use sigv4::{sign_get, Credentials};
