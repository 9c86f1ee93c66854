//! Minimal client for an SQS-style message queue
//!
//! Speaks the query protocol over signed HTTP GETs: enqueue a text message,
//! poll a batch of available messages, and acknowledge a consumed message by
//! its receipt handle. Signatures age out on the provider side; the client
//! re-signs and retries once, transparently, when a response says so.

mod client;
mod config;
mod endpoint;
mod error;
mod sign;
mod transport;
mod xml;

pub use client::SqsClient;
pub use config::Config;
pub use endpoint::QueueEndpoint;
pub use error::SqsError;
pub use sign::{Credentials, SigV4Signer, SignRequest, SignedAction};
pub use transport::RequestExecutor;
pub use xml::{decode_messages, unescape_xml, ReceivedMessage};
