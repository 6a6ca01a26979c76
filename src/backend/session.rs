use crate::backend::api::{AuthApi, UserProfile};

/// Only `Authenticated` carries a user. A failed check stays apart from a real sign-out.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Pending,
    Unauthenticated,
    Authenticated(UserProfile),
    CheckFailed(String),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user().map(|u| u.id.as_str())
    }

    pub fn owns(&self, user_id: &str) -> bool {
        self.user_id() == Some(user_id)
    }
}

/// Runs the one-shot session check: `is_authenticated`, then `me` when signed in.
pub async fn load_session<A: AuthApi>(auth: &A) -> SessionState {
    match auth.is_authenticated().await {
        Ok(false) => SessionState::Unauthenticated,
        Ok(true) => match auth.me().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, admin = user.is_admin(), "session resolved");
                SessionState::Authenticated(user)
            }
            Err(e) => {
                tracing::warn!("profile fetch failed: {}", e);
                SessionState::CheckFailed(e.to_string())
            }
        },
        Err(e) => {
            tracing::warn!("auth check failed: {}", e);
            SessionState::CheckFailed(e.to_string())
        }
    }
}
