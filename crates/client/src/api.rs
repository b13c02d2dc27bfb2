//! Form service HTTP client
//!
//! Two endpoints are used:
//!
//! - `POST {base}/public/forms` stores a submitted form
//! - `GET {base}/public/forms/id/{id}` fetches a stored form for filling in
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = FormApiClient::new(ClientConfig::from_env()?)?
//!     .with_token(session.token());
//! let created = client.create_form(&payload).await?;
//! let template = client.fetch_form("abc123").await?;
//! ```

use crate::config::ClientConfig;
use formula_core::{FormError, FormResult};
use formula_ir::{FormTemplate, SubmissionPayload};
use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// What the service answers to a create request
///
/// Only the id is of interest and the service is free to omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedForm {
    #[serde(default, alias = "_id", alias = "formId")]
    pub id: Option<String>,
}

/// Client for the remote form service
#[derive(Debug, Clone)]
pub struct FormApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl FormApiClient {
    /// Build a client from a validated configuration
    pub fn new(config: ClientConfig) -> FormResult<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            FormError::invalid_config(format!("invalid API base URL '{}': {e}", config.base_url))
        })?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| FormError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request when set
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    /// Service root the client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Store a form
    pub async fn create_form(&self, payload: &SubmissionPayload) -> FormResult<CreatedForm> {
        let url = self.endpoint(&["public", "forms"])?;
        tracing::debug!(
            "Submitting form with {} field(s) to {}",
            payload.fields.len(),
            url
        );

        let mut request = self.http.post(url).json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;
        let response = check_status(response).await?;

        let body = response.bytes().await.map_err(transport_error)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(CreatedForm::default());
        }
        Ok(serde_json::from_slice(&body).unwrap_or_default())
    }

    /// Fetch a stored form by id
    pub async fn fetch_form(&self, form_id: &str) -> FormResult<FormTemplate> {
        let url = self.endpoint(&["public", "forms", "id", form_id])?;
        tracing::debug!("Fetching form from {}", url);

        match self.get_json::<FormTemplate>(url).await {
            Err(FormError::Api { status: 404, .. }) => {
                Err(FormError::FormNotFound(form_id.to_string()))
            }
            other => other,
        }
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FormResult<T> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;
        let response = check_status(response).await?;
        let body = response.bytes().await.map_err(transport_error)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> FormResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FormError::invalid_config("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn transport_error(e: reqwest::Error) -> FormError {
    if e.is_timeout() {
        FormError::http(format!("request timed out: {e}"))
    } else if e.is_connect() {
        FormError::http(format!("unable to reach the form service: {e}"))
    } else {
        FormError::http(e.to_string())
    }
}

/// Turn a non-success response into `FormError::Api`
async fn check_status(response: Response) -> FormResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(FormError::api(status.as_u16(), error_message(status, &body)))
}

/// Pull a message out of an error body, falling back to the status text
fn error_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(alias = "error")]
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let body = body.trim();
    if !body.is_empty() && body.len() <= 200 {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formula_core::ElementType;
    use formula_ir::{Element, FormPage};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FormApiClient {
        FormApiClient::new(ClientConfig::default().with_base_url(server.uri())).unwrap()
    }

    fn sample_payload() -> SubmissionPayload {
        let mut page = FormPage::new();
        page.push(Element::new(ElementType::Heading));
        page.push(Element::new(ElementType::Dropdown));
        SubmissionPayload::from_page(&page, "owner-1")
    }

    #[tokio::test]
    async fn test_create_form_posts_payload() {
        let server = MockServer::start().await;
        let payload = sample_payload();

        Mock::given(method("POST"))
            .and(path("/public/forms"))
            .and(body_json(serde_json::to_value(&payload).unwrap()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "f-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let created = client_for(&server).create_form(&payload).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("f-1"));
    }

    #[tokio::test]
    async fn test_create_form_sends_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/public/forms"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let created = client_for(&server)
            .with_token(Some("tok"))
            .create_form(&sample_payload())
            .await
            .unwrap();
        assert_eq!(created, CreatedForm::default());
    }

    #[tokio::test]
    async fn test_create_form_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/public/forms"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "database down"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_form(&sample_payload())
            .await
            .unwrap_err();
        assert!(err.is_transport());
        match err {
            FormError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_form() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/public/forms/id/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "title": "Survey",
                "description": "Quick one",
                "fields": [
                    {"id": "1", "label": "Name", "type": "full_name", "required": false}
                ]
            })))
            .mount(&server)
            .await;

        let template = client_for(&server).fetch_form("abc123").await.unwrap();
        assert_eq!(template.title, "Survey");
        assert_eq!(template.fields[0].element_type(), Some(ElementType::FullName));
    }

    #[tokio::test]
    async fn test_fetch_missing_form() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/public/forms/id/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_form("nope").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, FormError::FormNotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_fetch_form_bad_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/public/forms/id/x"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_form("x").await.unwrap_err();
        assert!(matches!(err, FormError::JsonSerialization(_)));
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/public/forms/id/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = FormApiClient::new(
            ClientConfig::default()
                .with_base_url(server.uri())
                .with_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        let err = client.fetch_form("slow").await.unwrap_err();
        assert!(matches!(err, FormError::Http(_)));
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client =
            FormApiClient::new(ClientConfig::default().with_base_url("http://localhost:5002/api"))
                .unwrap();
        let url = client.endpoint(&["public", "forms", "id", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5002/api/public/forms/id/a%20b%2Fc");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error": "bad form"}"#),
            "bad form"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream"), "upstream");
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }
}
