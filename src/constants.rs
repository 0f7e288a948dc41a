//! Constants

/// Port listened on (all interfaces) when `ADDR` is not set.
pub(crate) const DEFAULT_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is not set.
pub(crate) const DEFAULT_LOG_FILTER: &str = "swipe_server=info,tower_http=info,sea_orm=warn";

// local development clients (expo web, metro, expo devtools)
pub(crate) const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:8081",
    "http://localhost:19000",
    "http://localhost:19006",
];

// messages returned to callers; never include internal detail here
pub(crate) const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub(crate) const INVALID_ACTION_MESSAGE: &str = "action must be 'like' or 'pass'";
pub(crate) const QUERY_FAILED_MESSAGE: &str = "DB query failed";
pub(crate) const USER_CONFLICT_MESSAGE: &str = "Could not create user (maybe email already exists)";
pub(crate) const INSERT_FAILED_MESSAGE: &str = "DB insert failed";
