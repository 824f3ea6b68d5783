//! User Directory
//!
//! Non-paginated user list (`GET <users>`) and single-user lookup
//! (`GET <users>/<id>`). Nothing is cached; every call hits the server.

use crate::domain::record::Record;
use crate::domain::user::UserDetail;
use crate::error::{Error, Result};
use crate::services::http::{RestClient, join_url};

#[derive(Clone, Debug)]
pub struct UserDirectory {
    base_url: String,
    client: RestClient,
}

impl UserDirectory {
    pub fn new(base_url: impl Into<String>, client: RestClient) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn base(&self) -> Result<&str> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(Error::MissingApiUrl);
        }
        Ok(base)
    }

    /// Fetch every user
    pub async fn list(&self) -> Result<Vec<Record>> {
        let base = self.base()?;
        tracing::info!(url = base, "Fetching users");
        self.client.fetch_collection(base).await
    }

    /// Fetch a single user by identifier
    pub async fn get(&self, id: &str) -> Result<UserDetail> {
        let url = join_url(self.base()?, id)?;
        tracing::info!(%url, "Fetching user details");
        self.client.fetch_record(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn directory(base: &str) -> UserDirectory {
        let client = RestClient::new(Duration::from_secs(5)).expect("client");
        UserDirectory::new(base, client)
    }

    #[tokio::test]
    async fn fetches_user_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "name": "John Doe",
                "username": "johndoe",
                "email": "john@example.com",
                "company": { "name": "ABC Corp" },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = directory(&format!("{}/users", server.uri()))
            .get("1")
            .await
            .expect("user");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.username.as_deref(), Some("johndoe"));
        assert_eq!(user.company.map(|c| c.name).as_deref(), Some("ABC Corp"));
    }

    #[tokio::test]
    async fn identifier_stays_one_path_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/a%2Fb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "a/b",
                "name": "Slash User",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = directory(&format!("{}/users", server.uri()))
            .get("a/b")
            .await
            .expect("user");
        assert_eq!(user.name, "Slash User");
    }

    #[tokio::test]
    async fn lists_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "name": "Leanne Graham", "email": "a@b.c", "phone": "1" },
                { "id": 2, "name": "Ervin Howell", "email": "d@e.f", "phone": "2" },
            ])))
            .mount(&server)
            .await;

        let users = directory(&format!("{}/users", server.uri()))
            .list()
            .await
            .expect("users");
        assert_eq!(users.len(), 2);
        assert_eq!(users[1]["name"], "Ervin Howell");
    }

    #[tokio::test]
    async fn empty_base_url_fails_fast() {
        let err = directory("").list().await.expect_err("no url");
        assert!(matches!(err, Error::MissingApiUrl));
    }
}
