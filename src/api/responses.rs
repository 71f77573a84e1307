//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::{Action, StopwatchView};

/// API response structure for action endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Omitted when the stopwatch could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<StopwatchView>,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, view: Option<StopwatchView>) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            view,
        }
    }

    /// Create a response for an accepted action
    pub fn ok(message: String, view: StopwatchView) -> Self {
        Self::new("ok".to_string(), message, Some(view))
    }

    /// Create an error response
    pub fn error(message: String, view: Option<StopwatchView>) -> Self {
        Self::new("error".to_string(), message, view)
    }
}

/// Status response with ticker and server information
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub view: StopwatchView,
    pub ticker_active: bool,
    pub uptime: String,
    pub last_action: Option<Action>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
