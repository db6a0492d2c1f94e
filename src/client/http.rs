use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use super::error::TransportError;
use super::request::{ChartRequest, ChartResponse, FormPayload, FormValue};

/// Path of the finder chart endpoint relative to the server URL.
const FINDER_CHARTS_PATH: &str = "finder-charts";

/// Sends finder chart requests to a server.
#[async_trait]
pub trait ChartTransport: Send + Sync {
    /// Posts `request` and returns the raw status and body.
    ///
    /// Any HTTP status is a successful transport; only failures to send or
    /// read are errors.
    async fn post(&self, request: &ChartRequest) -> Result<ChartResponse, TransportError>;
}

/// Returns the finder chart endpoint for a server base URL.
pub fn endpoint_url(server_url: &str) -> String {
    format!("{}/{FINDER_CHARTS_PATH}", server_url.trim_end_matches('/'))
}

/// [`ChartTransport`] over HTTP using reqwest.
///
/// No timeout is configured; requests resolve however the transport does.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport posting to `<server_url>/finder-charts`.
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint_url(server_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChartTransport for HttpTransport {
    async fn post(&self, request: &ChartRequest) -> Result<ChartResponse, TransportError> {
        let form = multipart_form(&request.payload).await?;
        info!(endpoint = %self.endpoint, mode = %request.mode, "posting finder chart request");
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("mode", request.mode.as_str())])
            .multipart(form)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "finder chart response received");
        Ok(ChartResponse { status, body })
    }
}

/// Builds the multipart body, reading any selected files.
///
/// An empty file path becomes an empty part with an empty file name, as a
/// browser sends for a file input left blank.
async fn multipart_form(payload: &FormPayload) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for (name, value) in payload.entries() {
        form = match value {
            FormValue::Text(text) => form.text(name.clone(), text.clone()),
            FormValue::File(path) if path.as_os_str().is_empty() => {
                form.part(name.clone(), file_part(Vec::new(), String::new())?)
            }
            FormValue::File(path) => {
                let contents =
                    tokio::fs::read(path)
                        .await
                        .map_err(|source| TransportError::ReadFile {
                            path: path.clone(),
                            source,
                        })?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                form.part(name.clone(), file_part(contents, file_name)?)
            }
        };
    }
    Ok(form)
}

fn file_part(contents: Vec<u8>, file_name: String) -> Result<Part, TransportError> {
    Ok(Part::bytes(contents)
        .file_name(file_name)
        .mime_str("application/octet-stream")?)
}
