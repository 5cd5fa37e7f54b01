use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::error::NetworkError;

/// Issues GET requests against the content API and hands back the JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, NetworkError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(mut base_url: Url) -> Self {
        // Url::join drops the last segment of a base without a trailing slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        self.base_url
            .join(path)
            .map_err(|e| NetworkError::Transport(format!("invalid request path {path}: {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, NetworkError> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{} with {} bytes", status, body.len());

        classify(status, &body)
    }
}

/// Non-success statuses are failures carrying the server's message, if any.
fn classify(status: StatusCode, body: &str) -> Result<Value, NetworkError> {
    if !status.is_success() {
        return Err(NetworkError::Status {
            status: status.as_u16(),
            message: server_message(body),
        });
    }
    parse_body(body)
}

fn parse_body(body: &str) -> Result<Value, NetworkError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| NetworkError::Decode(e.to_string()))?;
    if value.is_null() {
        return Err(NetworkError::Empty);
    }
    Ok(value)
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}
