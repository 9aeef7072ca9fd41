use crate::domain::model::{EntryPosition, MenuCategory};
use crate::domain::ports::MenuService;
use crate::utils::error::{Result, TidyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

const LIST_MENU_PATH: &str = "/api/interface/list_menu";
const UP_INDEX_PATH: &str = "/api/interface/up_index";

/// YApi 統一響應信封：errcode 0 為成功
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    errcode: i64,
    #[serde(default)]
    errmsg: String,
    data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    fn check(self) -> Result<Option<T>> {
        if self.errcode != 0 {
            return Err(TidyError::ApiError {
                code: self.errcode,
                message: self.errmsg,
            });
        }
        Ok(self.data)
    }
}

/// HTTP client for the YApi interface-menu endpoints.
///
/// The body is decoded regardless of HTTP status, like the in-page caller
/// this replaces: a well-formed envelope with non-zero errcode surfaces as
/// `ApiError`, anything unparseable as `InvalidResponse`.
pub struct YapiClient {
    http: Client,
    base: Url,
    token: Option<String>,
}

impl YapiClient {
    pub fn new(base: Url, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base,
            token,
        }
    }

    pub fn from_server(server: &str, token: Option<String>) -> Result<Self> {
        let base = Url::parse(server).map_err(|e| TidyError::ConfigError {
            message: format!("Invalid server URL '{}': {}", server, e),
        })?;
        Ok(Self::new(base, token))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base.join(path).map_err(|e| TidyError::ConfigError {
            message: format!("Cannot build endpoint URL for '{}': {}", path, e),
        })?;
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        Ok(url)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>> {
        serde_json::from_str(body).map_err(|e| TidyError::InvalidResponse {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl MenuService for YapiClient {
    async fn fetch_menu(&self, project_id: u64) -> Result<Vec<MenuCategory>> {
        let mut url = self.endpoint(LIST_MENU_PATH)?;
        url.query_pairs_mut()
            .append_pair("project_id", &project_id.to_string());

        tracing::debug!(%url, "GET list_menu");
        let body = self.http.get(url).send().await?.text().await?;

        let envelope: ApiEnvelope<Vec<MenuCategory>> = Self::decode(&body)?;
        envelope.check()?.ok_or_else(|| TidyError::InvalidResponse {
            message: "list_menu envelope has no data".to_string(),
        })
    }

    async fn apply_order(&self, positions: &[EntryPosition]) -> Result<()> {
        let url = self.endpoint(UP_INDEX_PATH)?;

        tracing::debug!(positions = positions.len(), "POST up_index");
        let body = self
            .http
            .post(url)
            .json(positions)
            .send()
            .await?
            .text()
            .await?;

        // 成功時不要求 data
        let envelope: ApiEnvelope<serde_json::Value> = Self::decode(&body)?;
        envelope.check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> YapiClient {
        YapiClient::from_server(&server.base_url(), None).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_menu_decodes_categories() {
        let server = MockServer::start();
        let menu_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/interface/list_menu")
                .query_param("project_id", "42");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "errcode": 0,
                    "errmsg": "成功！",
                    "data": [
                        {
                            "_id": 10,
                            "name": "用户管理",
                            "list": [
                                {"_id": 1, "title": "用户列表", "index": 0},
                                {"_id": 2, "title": "用户添加", "index": 1}
                            ]
                        },
                        {"_id": 11, "name": "空分类"}
                    ]
                }));
        });

        let categories = client(&server).fetch_menu(42).await.unwrap();

        menu_mock.assert();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "用户管理");
        assert_eq!(categories[0].list.len(), 2);
        assert_eq!(categories[0].list[0].id, 1);
        // a category without `list` deserializes as empty
        assert!(categories[1].list.is_empty());
    }

    #[tokio::test]
    async fn test_non_zero_errcode_is_an_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/interface/list_menu");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "errcode": 40011,
                    "errmsg": "请登录"
                }));
        });

        let err = client(&server).fetch_menu(42).await.unwrap_err();
        match err {
            TidyError::ApiError { code, message } => {
                assert_eq!(code, 40011);
                assert_eq!(message, "请登录");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body_is_invalid_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/interface/list_menu");
            then.status(500).body("<html>Internal Server Error</html>");
        });

        let err = client(&server).fetch_menu(42).await.unwrap_err();
        assert!(matches!(err, TidyError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_success_without_data_is_invalid_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/interface/list_menu");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"errcode": 0, "errmsg": "ok"}));
        });

        let err = client(&server).fetch_menu(42).await.unwrap_err();
        assert!(matches!(err, TidyError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_apply_order_posts_positions() {
        let server = MockServer::start();
        let update_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/interface/up_index")
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 2, "index": 0},
                    {"id": 1, "index": 1}
                ]));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"errcode": 0, "errmsg": "成功！"}));
        });

        let positions = vec![
            EntryPosition { id: 2, index: 0 },
            EntryPosition { id: 1, index: 1 },
        ];
        client(&server).apply_order(&positions).await.unwrap();

        update_mock.assert();
    }

    #[tokio::test]
    async fn test_apply_order_surfaces_server_rejection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/interface/up_index");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"errcode": 1, "errmsg": "locked"}));
        });

        let err = client(&server)
            .apply_order(&[EntryPosition { id: 1, index: 0 }])
            .await
            .unwrap_err();

        match err {
            TidyError::ApiError { code, message } => {
                assert_eq!(code, 1);
                assert_eq!(message, "locked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_token_is_appended_to_requests() {
        let server = MockServer::start();
        let menu_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/interface/list_menu")
                .query_param("token", "secret")
                .query_param("project_id", "7");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"errcode": 0, "errmsg": "", "data": []}));
        });

        let client = YapiClient::from_server(&server.base_url(), Some("secret".to_string())).unwrap();
        let categories = client.fetch_menu(7).await.unwrap();

        menu_mock.assert();
        assert!(categories.is_empty());
    }
}
