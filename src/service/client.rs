use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::core::types::GenomeBuild;
use crate::parsing::response::{extract_protein_descriptor, ProteinRepresentation, ResponseError};

/// Default VariantValidator REST endpoint
pub const DEFAULT_BASE_URL: &str =
    "https://rest.variantvalidator.org/VariantValidator/variantvalidator";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid service base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Settings for talking to the VariantValidator service
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub representation: ProteinRepresentation,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            representation: ProteinRepresentation::default(),
        }
    }
}

/// Build the request URL for a transcript variant.
///
/// The variant is percent-encoded as a single path segment, so `>` in
/// `NM_000088.3:c.589G>T` becomes `%3E`.
///
/// # Errors
///
/// Returns `ServiceError::InvalidBaseUrl` if the base URL cannot be parsed or
/// cannot carry path segments.
pub fn build_request_url(
    base_url: &str,
    build: GenomeBuild,
    variant: &str,
) -> Result<Url, ServiceError> {
    let invalid = || ServiceError::InvalidBaseUrl(base_url.to_string());

    let mut url = Url::parse(base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .push(&build.to_string())
        .push(variant.trim())
        .push("all");
    url.query_pairs_mut()
        .append_pair("content-type", "application/json");

    Ok(url)
}

/// Client for the VariantValidator REST service
pub struct VariantValidatorClient {
    config: FetchConfig,
    client: Client,
}

impl VariantValidatorClient {
    /// Create a client
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Http` if the HTTP client cannot be built.
    pub fn new(config: FetchConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("so-classifier/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, client })
    }

    /// Fetch the predicted protein consequence for a transcript variant
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Http` on transport failure, `ServiceError::Status`
    /// on a non-success status, or `ServiceError::Response` if the body does
    /// not contain the requested protein representation.
    pub async fn fetch_protein_descriptor(
        &self,
        build: GenomeBuild,
        variant: &str,
    ) -> Result<String, ServiceError> {
        let url = build_request_url(&self.config.base_url, build, variant)?;
        debug!(url = %url, "Requesting data from VariantValidator");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let descriptor = extract_protein_descriptor(&body, self.config.representation)?;
        debug!(descriptor = %descriptor, "Extracted protein descriptor");

        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_build_request_url() {
        let url = build_request_url(DEFAULT_BASE_URL, GenomeBuild::Grch38, "NM_000088.3:c.589G>T")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://rest.variantvalidator.org/VariantValidator/variantvalidator/GRCh38/NM_000088.3:c.589G%3ET/all?content-type=application%2Fjson"
        );
    }

    #[test]
    fn test_build_request_url_trailing_slash() {
        let url = build_request_url("http://localhost:8000/vv/", GenomeBuild::Grch37, "NM_1.1:c.1A>G")
            .unwrap();
        assert_eq!(url.path(), "/vv/GRCh37/NM_1.1:c.1A%3EG/all");
    }

    #[test]
    fn test_build_request_url_invalid_base() {
        assert!(matches!(
            build_request_url("not a url", GenomeBuild::Grch38, "NM_1.1:c.1A>G"),
            Err(ServiceError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            build_request_url("mailto:someone@example.com", GenomeBuild::Grch38, "NM_1.1:c.1A>G"),
            Err(ServiceError::InvalidBaseUrl(_))
        ));
    }

    /// Serve a single canned HTTP response and return the base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/VariantValidator/variantvalidator")
    }

    #[tokio::test]
    async fn test_fetch_protein_descriptor() {
        let body = r#"{"NM_000088.3:c.589G>T": {"hgvs_predicted_protein_consequence": {"slr": "NP_000079.2:p.(G197C)", "tlr": "NP_000079.2:p.(Gly197Cys)"}}, "flag": "gene_variant"}"#;
        let base_url = serve_once("200 OK", body).await;

        let client = VariantValidatorClient::new(FetchConfig {
            base_url,
            ..FetchConfig::default()
        })
        .unwrap();

        let descriptor = client
            .fetch_protein_descriptor(GenomeBuild::Grch38, "NM_000088.3:c.589G>T")
            .await
            .unwrap();
        assert_eq!(descriptor, "NP_000079.2:p.(G197C)");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let base_url = serve_once("500 Internal Server Error", "{}").await;

        let client = VariantValidatorClient::new(FetchConfig {
            base_url,
            ..FetchConfig::default()
        })
        .unwrap();

        let err = client
            .fetch_protein_descriptor(GenomeBuild::Grch37, "NM_000088.3:c.589G>T")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Status { status: 500, .. }));
    }
}
