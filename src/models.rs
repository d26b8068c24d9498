use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::policy::Role;

// --- Response Schemas ---

/// PageView
///
/// The JSON descriptor returned by every page handler. The real portal
/// serves rendered pages here; this service only needs enough of a body for
/// the guard's behavior to be observable end to end.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct PageView {
    // The canonical path of the page, as routed.
    pub path: String,
    // Human-readable page title.
    pub title: String,
}

impl PageView {
    pub fn new(path: &str, title: &str) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
        }
    }
}

/// SessionInfo
///
/// What the portal knows about the current visitor, as resolved from
/// cookies. Exposed so the frontends can render login state without a
/// round trip to the backend API.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub role: Option<Role>,
}
