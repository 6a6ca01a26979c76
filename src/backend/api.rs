use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NOTIFICATION_ENTITY: &str = "Notification";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.is_admin || self.role.as_deref() == Some("admin")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationFilter {
    pub user_id: String,
    pub is_read: bool,
}

impl NotificationFilter {
    pub fn unread_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            is_read: false,
        }
    }

    pub fn to_query(&self) -> Value {
        serde_json::json!({ "user_id": self.user_id, "is_read": self.is_read })
    }
}

#[async_trait(?Send)]
pub trait AuthApi {
    async fn is_authenticated(&self) -> Result<bool, ApiError>;
    async fn me(&self) -> Result<UserProfile, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
pub trait EntityApi {
    async fn filter(&self, entity: &str, query: &Value) -> Result<Vec<Value>, ApiError>;
}
