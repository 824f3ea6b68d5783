//! REST Client
//!
//! Thin wrapper over `reqwest::Client` that turns HTTP failures into the crate
//! error taxonomy: transport failures, non-2xx answers (keeping the server's
//! `message` field when the body has one) and malformed bodies.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::record::Record;
use crate::error::{Error, Result};

/// Shared HTTP client; cheap to clone
#[derive(Clone, Debug)]
pub struct RestClient {
    client: reqwest::Client,
}

impl RestClient {
    /// Create a client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rest-grid/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` with query parameters and decode the body as JSON
    pub async fn get_json(&self, url: &str, params: &BTreeMap<String, String>) -> Result<Value> {
        tracing::debug!(url, ?params, "GET");

        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes).ok().and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });
            tracing::warn!(url, status = status.as_u16(), ?message, "Request rejected");
            return Err(Error::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET a bare array of records (non-paginated endpoints)
    pub async fn fetch_collection(&self, url: &str) -> Result<Vec<Record>> {
        match self.get_json(url, &BTreeMap::new()).await? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    _ => Err(Error::protocol("Invalid row received from server")),
                })
                .collect(),
            _ => Err(Error::protocol("Invalid data format received from server")),
        }
    }

    /// GET a single record and deserialize it
    pub async fn fetch_record<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_json(url, &BTreeMap::new()).await?;
        Ok(serde_json::from_value(body)?)
    }
}

/// `<base>/<id>` with `id` percent-encoded as a single path segment
pub fn join_url(base: &str, id: &str) -> Result<String> {
    let mut url = reqwest::Url::parse(base)
        .map_err(|e| Error::invalid(format!("endpoint {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| Error::invalid(format!("endpoint {base} cannot take a path")))?
        .pop_if_empty()
        .push(id);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> RestClient {
        RestClient::new(Duration::from_secs(5)).expect("client")
    }

    #[tokio::test]
    async fn server_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({ "message": "Maintenance" })),
            )
            .mount(&server)
            .await;

        let err = client()
            .get_json(&format!("{}/items", server.uri()), &BTreeMap::new())
            .await
            .expect_err("503 should fail");
        assert!(matches!(err, Error::Server { status: 503, .. }));
        assert_eq!(err.display_message(), "Maintenance");
    }

    #[tokio::test]
    async fn plain_error_body_falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let err = client()
            .get_json(&server.uri(), &BTreeMap::new())
            .await
            .expect_err("404 should fail");
        assert_eq!(err.display_message(), "Request failed with status code 404");
    }

    #[tokio::test]
    async fn collection_must_be_an_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .mount(&server)
            .await;

        let err = client()
            .fetch_collection(&server.uri())
            .await
            .expect_err("object is not a collection");
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let err = client()
            .get_json("http://127.0.0.1:9/unreachable", &BTreeMap::new())
            .await
            .expect_err("nothing listens on port 9");
        assert!(matches!(err, Error::Transport { .. }));
        assert!(!err.display_message().is_empty());
    }

    #[test]
    fn join_url_trims_trailing_slash() {
        assert_eq!(join_url("http://x/users/", "3").expect("url"), "http://x/users/3");
        assert_eq!(join_url("http://x/users", "3").expect("url"), "http://x/users/3");
    }

    #[test]
    fn join_url_encodes_the_identifier() {
        assert_eq!(
            join_url("http://x/users", "a/b?c#d").expect("url"),
            "http://x/users/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn join_url_rejects_unusable_base() {
        let err = join_url("not a url", "1").expect_err("relative base");
        assert!(matches!(err, Error::Invalid { .. }));
    }
}
