use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::api::{ApiError, AuthApi, EntityApi, UserProfile};
use crate::config::Config;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    // Shared by clones so a logout through one signs out all of them
    token: Rc<RefCell<Option<String>>>,
    // Profile fetched by the last successful check, handed out once by `me`
    profile: Rc<RefCell<Option<UserProfile>>>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            token: Rc::new(RefCell::new(config.access_token.clone())),
            profile: Rc::new(RefCell::new(None)),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.borrow().is_some()
    }

    fn app_url(&self, path: &str) -> String {
        format!("{}/api/apps/{}/{}", self.base_url, self.app_id, path)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url).header("X-App-Id", &self.app_id);
        if let Some(token) = self.token.borrow().as_deref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        let url = self.app_url("entities/User/me");
        self.fetch_json(self.request(reqwest::Method::GET, &url)).await
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn is_authenticated(&self) -> Result<bool, ApiError> {
        if !self.has_token() {
            return Ok(false);
        }
        match self.fetch_profile().await {
            Ok(user) => {
                *self.profile.borrow_mut() = Some(user);
                Ok(true)
            }
            Err(ApiError::Status { status: 401 | 403, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn me(&self) -> Result<UserProfile, ApiError> {
        if let Some(user) = self.profile.take() {
            return Ok(user);
        }
        self.fetch_profile().await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        *self.profile.borrow_mut() = None;
        let had_token = self.token.borrow().is_some();
        if !had_token {
            return Ok(());
        }

        let url = self.app_url("auth/logout");
        let result = self.request(reqwest::Method::POST, &url).send().await;
        self.token.borrow_mut().take();

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = response.status().as_u16(), "logout request rejected");
            }
            Err(e) => tracing::warn!("logout request failed: {}", e),
            Ok(_) => {}
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl EntityApi for ApiClient {
    async fn filter(&self, entity: &str, query: &Value) -> Result<Vec<Value>, ApiError> {
        let url = self.app_url(&format!("entities/{entity}"));
        let builder = self
            .request(reqwest::Method::GET, &url)
            .query(&[("q", query.to_string())]);
        self.fetch_json(builder).await
    }
}
