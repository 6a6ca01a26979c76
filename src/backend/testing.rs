//! In-memory stand-ins for the backend service used by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::api::{ApiError, AuthApi, EntityApi, UserProfile};

fn server_error() -> ApiError {
    ApiError::Status { status: 500, body: "internal error".into() }
}

pub fn student(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        full_name: format!("Student {id}"),
        email: format!("{id}@gvpce.ac.in"),
        is_admin: false,
        role: Some("user".into()),
    }
}

#[derive(Clone)]
pub struct FakeAuth {
    check: Arc<Mutex<Option<bool>>>,
    profile: Arc<Mutex<Option<UserProfile>>>,
    me_calls: Arc<AtomicUsize>,
    logout_calls: Arc<AtomicUsize>,
}

impl FakeAuth {
    fn new(check: Option<bool>, profile: Option<UserProfile>) -> Self {
        Self {
            check: Arc::new(Mutex::new(check)),
            profile: Arc::new(Mutex::new(profile)),
            me_calls: Arc::new(AtomicUsize::new(0)),
            logout_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self::new(Some(true), Some(user))
    }

    pub fn signed_out() -> Self {
        Self::new(Some(false), None)
    }

    pub fn check_fails() -> Self {
        Self::new(None, None)
    }

    pub fn profile_fails() -> Self {
        Self::new(Some(true), None)
    }

    /// Changes who the next session check finds; `None` means nobody is signed in.
    pub fn switch_to(&self, user: Option<UserProfile>) {
        *self.check.lock().unwrap() = Some(user.is_some());
        *self.profile.lock().unwrap() = user;
    }

    pub fn me_calls(&self) -> usize {
        self.me_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuth {
    async fn is_authenticated(&self) -> Result<bool, ApiError> {
        let check = *self.check.lock().unwrap();
        check.ok_or_else(server_error)
    }

    async fn me(&self) -> Result<UserProfile, ApiError> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        self.profile.lock().unwrap().clone().ok_or_else(server_error)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeEntities {
    unread: Arc<AtomicUsize>,
    failures_left: Arc<AtomicUsize>,
    hanging: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<(String, Value)>>>,
}

impl FakeEntities {
    pub fn with_unread(unread: usize) -> Self {
        let fake = Self::default();
        fake.set_unread(unread);
        fake
    }

    pub fn set_unread(&self, unread: usize) {
        self.unread.store(unread, Ordering::SeqCst);
    }

    /// Makes the next `n` queries fail.
    pub fn fail_next(&self, n: usize) {
        self.failures_left.store(n, Ordering::SeqCst);
    }

    pub fn hang(&self) {
        self.hanging.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<(String, Value)> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl EntityApi for FakeEntities {
    async fn filter(&self, entity: &str, query: &Value) -> Result<Vec<Value>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some((entity.to_string(), query.clone()));

        if self.hanging.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(server_error());
        }

        let records = (0..self.unread.load(Ordering::SeqCst))
            .map(|i| serde_json::json!({ "id": format!("n{i}"), "is_read": false }))
            .collect();
        Ok(records)
    }
}
