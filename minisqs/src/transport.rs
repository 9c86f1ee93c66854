//! HTTP request execution

use crate::error::SqsError;
use crate::sign::SignedAction;

/// Issues one GET per signed descriptor and buffers the whole response body
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    scheme: String,
    http: reqwest::Client,
}

impl RequestExecutor {
    /// Create an executor for the given URL scheme
    pub fn new(scheme: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            scheme: scheme.into(),
            http,
        }
    }

    /// Execute a signed action, returning the raw response body
    ///
    /// Status codes are not inspected here: error bodies flow back to the
    /// caller unchanged, and only transport failures become errors.
    pub async fn execute(&self, action: &SignedAction) -> Result<String, SqsError> {
        let url = format!("{}://{}{}", self.scheme, action.host(), action.path());

        let mut request = self.http.get(&url);
        for (name, value) in action.auth_headers() {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        Ok(response.text().await?)
    }
}
