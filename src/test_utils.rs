//! Shared test fixtures: an in-memory marketplace API and app state

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::http::StatusCode;
use tokio::sync::Notify;

use crate::{
    api::{
        Credentials, ItemsQuery, LoginSession, MarketplaceApi, Page, UserStatusUpdate, UsersQuery,
    },
    config::{AccessConfig, Config, ServerConfig, SessionConfig, UpstreamConfig},
    constants::{DEFAULT_SESSION_COOKIE_NAME, DEFAULT_UNIVERSITY_EMAIL_DOMAIN},
    error::{AppError, AppResult},
    middleware::RolePolicy,
    models::{
        DashboardStats, IdentityRecord, Item, ItemStatus, PageMeta, RecentActivity, Role, User,
    },
    state::AppState,
};

/// What `/user/me` answers for a token
#[derive(Debug, Clone)]
enum IdentityBehavior {
    Record(IdentityRecord),
    Fail,
}

/// In-memory [`MarketplaceApi`] with canned tables and call recording.
///
/// Unknown tokens resolve to `Ok(None)`.
#[derive(Default)]
pub struct FakeMarketplaceApi {
    identities: Mutex<HashMap<String, IdentityBehavior>>,
    rejected_sessions: Mutex<HashMap<String, StatusCode>>,
    login: Mutex<Option<LoginSession>>,
    identity_gate: Mutex<Option<Arc<Notify>>>,
    identity_calls: AtomicUsize,
    login_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    last_users_query: Mutex<Option<UsersQuery>>,
    moderations: Mutex<Vec<String>>,
}

impl FakeMarketplaceApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(self, token: &str, record: IdentityRecord) -> Self {
        self.set_identity(token, record);
        self
    }

    /// `/user/me` answers with `data: null`
    pub fn with_no_identity(self, token: &str) -> Self {
        self.identities.lock().unwrap().remove(token);
        self
    }

    pub fn with_failing_identity(self, token: &str) -> Self {
        self.identities
            .lock()
            .unwrap()
            .insert(token.to_string(), IdentityBehavior::Fail);
        self
    }

    /// Every login succeeds with this token and role
    pub fn with_login(self, token: &str, role: &str) -> Self {
        let user = user_fixture("u1", "Console User", "ACTIVE", role);
        *self.login.lock().unwrap() = Some(LoginSession {
            user,
            access_token: token.to_string(),
        });
        self
    }

    /// `/user/me` still admits the token but every other call answers
    /// `status`, like an upstream session that expired after login
    pub fn with_rejected_session(self, token: &str, status: StatusCode) -> Self {
        self.rejected_sessions
            .lock()
            .unwrap()
            .insert(token.to_string(), status);
        self
    }

    pub fn set_identity(&self, token: &str, record: IdentityRecord) {
        self.identities
            .lock()
            .unwrap()
            .insert(token.to_string(), IdentityBehavior::Record(record));
    }

    /// Identity lookups block until the returned gate is notified
    pub fn hold_identity_lookups(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.identity_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    pub fn last_users_query(&self) -> Option<UsersQuery> {
        self.last_users_query.lock().unwrap().clone()
    }

    /// Mutations in call order, e.g. `user:u9:ACTIVE:verified` or `item:i1:delete`
    pub fn moderations(&self) -> Vec<String> {
        self.moderations.lock().unwrap().clone()
    }

    fn check_session(&self, token: &str) -> AppResult<()> {
        match self.rejected_sessions.lock().unwrap().get(token) {
            Some(&status) => Err(AppError::Upstream {
                status,
                message: "jwt expired".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn record(&self, entry: String) {
        self.moderations.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl MarketplaceApi for FakeMarketplaceApi {
    async fn login(&self, _credentials: &Credentials) -> AppResult<LoginSession> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::Upstream {
                status: StatusCode::UNAUTHORIZED,
                message: "Invalid email or password".to_string(),
            })
    }

    async fn logout(&self, _token: &str) -> AppResult<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn current_user(&self, token: &str) -> AppResult<Option<IdentityRecord>> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.identity_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let behavior = self.identities.lock().unwrap().get(token).cloned();
        match behavior {
            Some(IdentityBehavior::Record(record)) => Ok(Some(record)),
            Some(IdentityBehavior::Fail) => Err(AppError::UpstreamUnavailable(
                "connection refused".to_string(),
            )),
            None => Ok(None),
        }
    }

    async fn list_users(&self, token: &str, query: &UsersQuery) -> AppResult<Page<User>> {
        self.check_session(token)?;
        *self.last_users_query.lock().unwrap() = Some(query.clone());
        Ok(Page {
            records: vec![user_fixture("u9", "Rahim", "PENDING", "SELLER")],
            meta: PageMeta {
                total: 1,
                page: query.page.unwrap_or(1),
                limit: query.limit.unwrap_or(10),
                total_pages: 1,
            },
        })
    }

    async fn update_user_status(
        &self,
        token: &str,
        user_id: &str,
        update: UserStatusUpdate,
    ) -> AppResult<()> {
        self.check_session(token)?;
        let status = format!("{:?}", update.is_status).to_uppercase();
        let entry = match update.is_verified {
            Some(true) => format!("user:{user_id}:{status}:verified"),
            _ => format!("user:{user_id}:{status}"),
        };
        self.record(entry);
        Ok(())
    }

    async fn delete_user(&self, token: &str, user_id: &str) -> AppResult<()> {
        self.check_session(token)?;
        self.record(format!("user:{user_id}:delete"));
        Ok(())
    }

    async fn list_items(&self, token: &str, query: &ItemsQuery) -> AppResult<Page<Item>> {
        self.check_session(token)?;
        Ok(Page {
            records: vec![item_fixture("i1", "PENDING")],
            meta: PageMeta::empty(query.limit.unwrap_or(10)),
        })
    }

    async fn update_item_status(
        &self,
        token: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> AppResult<()> {
        self.check_session(token)?;
        self.record(format!("item:{item_id}:{}", format!("{status:?}").to_uppercase()));
        Ok(())
    }

    async fn delete_item(&self, token: &str, item_id: &str) -> AppResult<()> {
        self.check_session(token)?;
        self.record(format!("item:{item_id}:delete"));
        Ok(())
    }

    async fn dashboard_stats(&self, token: &str) -> AppResult<DashboardStats> {
        self.check_session(token)?;
        Ok(DashboardStats {
            total_users: 42,
            active_users: 30,
            pending_users: 10,
            suspended_users: 2,
            total_items: 17,
            published_items: 12,
            pending_items: 4,
            canceled_items: 1,
        })
    }

    async fn recent_activity(&self, token: &str, _limit: Option<u32>) -> AppResult<RecentActivity> {
        self.check_session(token)?;
        Ok(RecentActivity::default())
    }
}

/// `/user/me` payload for an id and wire role
pub fn identity_record(id: &str, role: &str) -> IdentityRecord {
    IdentityRecord {
        id: Some(id.to_string()),
        active_role: role.parse().unwrap_or(Role::Unknown),
        is_verified: true,
        name: Some(format!("User {id}")),
        email: Some(format!("{id}@cse.bubt.edu.bd")),
        ..Default::default()
    }
}

pub fn user_fixture(id: &str, name: &str, status: &str, role: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "name": name,
        "email": format!("{}@cse.bubt.edu.bd", name.to_lowercase().replace(' ', ".")),
        "activeRole": role,
        "isVerified": status != "PENDING",
        "isStatus": status
    }))
    .unwrap()
}

pub fn item_fixture(id: &str, status: &str) -> Item {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "ownerId": "u9",
        "title": "Data structures textbook",
        "price": 400.0,
        "status": status,
        "sellingCategory": "SELL",
        "availability": "IN_STOCK",
        "objectCategory": "BOOKS"
    }))
    .unwrap()
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        },
        upstream: UpstreamConfig {
            base_url: "http://marketplace.test/api/v1".to_string(),
            timeout_secs: 1,
        },
        session: SessionConfig {
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            cookie_secure: false,
            identity_wait_ms: 200,
        },
        access: AccessConfig {
            university_email_domain: DEFAULT_UNIVERSITY_EMAIL_DOMAIN.to_string(),
            role_policy: RolePolicy::AnyPrivileged,
        },
    }
}

pub fn test_state(api: Arc<FakeMarketplaceApi>) -> AppState {
    AppState::new(api, test_config())
}
