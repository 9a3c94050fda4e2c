use crate::ports::outbound::{DependencySubmitter, SubmissionReceipt};
use crate::sbom_generation::domain::{Bom, RepositoryId};
use crate::shared::error::SbomError;
use crate::shared::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

/// Public GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Fields read back from a successful snapshot submission
#[derive(Debug, Default, Deserialize)]
struct SnapshotResponse {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    message: Option<String>,
}

/// GitHubDependencySubmitter adapter for the dependency-submission API
///
/// Bound to one repository and one token at construction. Each call to
/// `submit_bom` issues exactly one blocking POST; there is no retry.
pub struct GitHubDependencySubmitter {
    client: reqwest::blocking::Client,
    repository: RepositoryId,
    endpoint: String,
}

impl GitHubDependencySubmitter {
    /// Creates a client for `repository` (`owner/repo`)
    ///
    /// # Arguments
    /// * `repository` - Target repository identifier
    /// * `token` - API token sent as a bearer credential
    /// * `api_url` - API root; `None` selects `DEFAULT_API_URL`
    ///
    /// # Errors
    /// - `SbomError::InvalidRepository` when `repository` is not `owner/repo`
    /// - `SbomError::MissingToken` when `token` is absent or blank
    /// - `SbomError::InvalidApiUrl` when `api_url` is not http(s)
    pub fn new(repository: &str, token: Option<&str>, api_url: Option<&str>) -> Result<Self> {
        Self::with_client_builder(
            repository,
            token,
            api_url,
            reqwest::blocking::Client::builder(),
        )
    }

    /// Like `new`, but ignores `HTTP(S)_PROXY` and friends
    ///
    /// Useful when the API is served from loopback, e.g. a local test server.
    pub fn new_without_proxy(
        repository: &str,
        token: Option<&str>,
        api_url: Option<&str>,
    ) -> Result<Self> {
        Self::with_client_builder(
            repository,
            token,
            api_url,
            reqwest::blocking::Client::builder().no_proxy(),
        )
    }

    fn with_client_builder(
        repository: &str,
        token: Option<&str>,
        api_url: Option<&str>,
        builder: reqwest::blocking::ClientBuilder,
    ) -> Result<Self> {
        let repository = RepositoryId::parse(repository)?;

        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SbomError::MissingToken {
                hint: "Pass --github-token or set GITHUB_TOKEN".to_string(),
            })?;

        let api_url = Self::normalize_api_url(api_url.unwrap_or(DEFAULT_API_URL))?;
        let endpoint = format!(
            "{}/repos/{}/{}/dependency-graph/snapshots",
            api_url,
            repository.owner(),
            repository.repo()
        );

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| SbomError::MissingToken {
                hint: "The token contains characters that are not allowed in an HTTP header"
                    .to_string(),
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let user_agent = format!("brewlock-sbom/{}", env!("CARGO_PKG_VERSION"));
        let client = builder
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            repository,
            endpoint,
        })
    }

    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    /// Full URL of the snapshot endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn normalize_api_url(api_url: &str) -> Result<String> {
        let trimmed = api_url.trim().trim_end_matches('/');
        let has_host = ["https://", "http://"].iter().any(|scheme| {
            trimmed
                .strip_prefix(scheme)
                .is_some_and(|rest| !rest.is_empty())
        });

        if !has_host {
            return Err(SbomError::InvalidApiUrl {
                url: api_url.to_string(),
                reason: "expected an http:// or https:// URL with a host".to_string(),
            }
            .into());
        }

        Ok(trimmed.to_string())
    }
}

impl DependencySubmitter for GitHubDependencySubmitter {
    fn target(&self) -> String {
        format!("{} ({})", self.repository, self.endpoint)
    }

    fn submit_bom(&self, bom: &Bom) -> Result<SubmissionReceipt> {
        let body = serde_json::to_vec(bom)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| SbomError::SubmissionRequestFailed {
                endpoint: self.endpoint.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text();

        if !status.is_success() {
            return Err(SbomError::SubmissionFailed {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                body: failure_body(text),
            }
            .into());
        }

        let snapshot: SnapshotResponse = text
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Ok(SubmissionReceipt::new(
            status.as_u16(),
            snapshot.id,
            snapshot.message,
        ))
    }
}

/// Body recorded on a failed submission; a body that could not be read
/// is described rather than dropped
fn failure_body<E: std::fmt::Display>(text: std::result::Result<String, E>) -> String {
    text.unwrap_or_else(|e| format!("<unreadable body: {}>", e))
}
