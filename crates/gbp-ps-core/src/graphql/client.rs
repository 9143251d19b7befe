//! HTTP client for the Gentoo Build Publisher GraphQL endpoint.
//!
//! Every request is a `POST /graphql` with a JSON body and
//! `Content-Type`/`Accept: application/json`, sent with [`reqwest`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::graphql::errors::GraphQlError;
use crate::graphql::queries::{ADD_BUILD_PROCESS_MUTATION, BUILD_PROCESSES_QUERY};
use crate::processes::BuildProcess;

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildProcessesData {
    build_processes: Vec<BuildProcess>,
}

/// Client for one Gentoo Build Publisher server.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GraphQlClient {
    /// Create a client for the server at `base_url`.
    ///
    /// Requests go to `/graphql` at the root of the server's origin; any path or
    /// query string on `base_url` (such as `?update_interval=`) is dropped.
    pub fn new(base_url: &Url) -> Result<Self, GraphQlError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &Url) -> Result<Self, GraphQlError> {
        let invalid = |message: String| GraphQlError::InvalidUrl {
            url: base_url.to_string(),
            message,
        };

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https".to_string()));
        }

        let endpoint = base_url
            .join("/graphql")
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch every build process the server currently tracks.
    pub async fn get_processes(&self) -> Result<Vec<BuildProcess>, GraphQlError> {
        let body = serde_json::json!({ "query": BUILD_PROCESSES_QUERY });
        let data: BuildProcessesData = self.execute(&body).await?;

        debug!(
            event = "core.graphql.get_processes_completed",
            count = data.build_processes.len()
        );

        Ok(data.build_processes)
    }

    /// Add (or update) a build process on the server.
    pub async fn add_process(&self, process: &BuildProcess) -> Result<(), GraphQlError> {
        let body = serde_json::json!({
            "query": ADD_BUILD_PROCESS_MUTATION,
            "variables": { "process": process },
        });
        let _: serde_json::Value = self.execute(&body).await?;

        debug!(
            event = "core.graphql.add_process_completed",
            machine = process.machine,
            package = process.package,
            phase = process.phase
        );

        Ok(())
    }

    // ---- private helpers ----

    /// POST a GraphQL document and return its `data` member.
    async fn execute<T: DeserializeOwned>(
        &self,
        body: &serde_json::Value,
    ) -> Result<T, GraphQlError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GraphQlError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        parse_response(&bytes)
    }
}

/// Decode a GraphQL response body, turning reported `errors` into a failure.
fn parse_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GraphQlError> {
    let envelope: GraphQlResponse<T> =
        serde_json::from_slice(bytes).map_err(|e| GraphQlError::InvalidResponse {
            message: e.to_string(),
        })?;

    if !envelope.errors.is_empty() {
        let messages = envelope
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GraphQlError::QueryFailed { messages });
    }

    envelope.data.ok_or_else(|| GraphQlError::InvalidResponse {
        message: "response has no data".to_string(),
    })
}
