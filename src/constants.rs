//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// UPSTREAM DEFAULTS
// =============================================================================

/// Default timeout for marketplace API calls in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Default name of the cookie carrying the marketplace access token
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "accessToken";

/// How long the access guard waits for an in-flight identity resolution
/// before answering with the loading indicator
pub const DEFAULT_IDENTITY_WAIT_MS: u64 = 1500;

/// Seconds a client should wait before retrying a page that is still loading
pub const LOADING_RETRY_AFTER_SECS: u64 = 1;

// =============================================================================
// ACCESS DEFAULTS
// =============================================================================

/// Email suffix required for console logins
pub const DEFAULT_UNIVERSITY_EMAIL_DOMAIN: &str = "@cse.bubt.edu.bd";

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LENGTH: u64 = 6;

// =============================================================================
// ROUTES
// =============================================================================

/// Fixed logical routes used by the access guard and the auth handlers
pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const LOGOUT: &str = "/logout";
    pub const UNAUTHORIZED: &str = "/unauthorized";
    pub const HEALTH: &str = "/health";

    /// Prefix shared by every protected console page
    pub const ADMIN_ROOT: &str = "/admin";

    /// Page the admin root redirects to
    pub const ADMIN_HOME: &str = "/admin/analytics";

    /// Prefix of the JSON moderation API
    pub const ADMIN_API_ROOT: &str = "/api/admin";
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for user and item tables
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size forwarded to the marketplace API
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default number of entries in the dashboard's recent activity feed
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: u32 = 5;

/// Filter value meaning "no status filter"
pub const FILTER_ALL: &str = "ALL";

// =============================================================================
// IDENTITY CACHE
// =============================================================================

/// Number of cached sessions above which settled entries are pruned
pub const MAX_CACHED_SESSIONS: usize = 10_000;
