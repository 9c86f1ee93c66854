//! Queue endpoint resolution

use url::Url;

use crate::error::SqsError;

/// Where the queue lives on the wire
///
/// Derived once from the configured queue URL; immutable for the client's
/// lifetime. The scheme only parameterizes the transport — signing never
/// sees it.
#[derive(Debug, Clone)]
pub struct QueueEndpoint {
    pub region: String,
    pub scheme: String,
    pub host: String,
    pub path: String,
}

impl QueueEndpoint {
    /// Split a queue URL into authority and path, keeping any query intact
    pub fn resolve(queue_url: &str, region: &str) -> Result<Self, SqsError> {
        let url = Url::parse(queue_url)
            .map_err(|e| SqsError::Config(format!("invalid queue URL {}: {}", queue_url, e)))?;

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(SqsError::Config(format!(
                    "queue URL {} has no host",
                    queue_url
                )));
            }
        };

        let mut path = url.path().to_string();
        if let Some(query) = url.query() {
            path.push('?');
            path.push_str(query);
        }

        // A bare origin cannot name a queue.
        if path.is_empty() || path == "/" {
            return Err(SqsError::Config(format!(
                "queue URL {} has no path",
                queue_url
            )));
        }

        Ok(Self {
            region: region.to_string(),
            scheme: url.scheme().to_string(),
            host,
            path,
        })
    }
}
