//! Issue reports
//!
//! Reports are independent of the marketplace domain; deduplication is by
//! the issue text itself.

use crate::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
    pub issue: String,
    pub created_at: DateTime<Utc>,
}
