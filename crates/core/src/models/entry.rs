//! Guest entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Descriptor;

/// A guest admitted to the club roster
///
/// Created once, at the moment a screened name is confirmed; immutable
/// afterwards and scoped to the running session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestEntry {
    pub id: Uuid,
    /// Admitted name; compared case-insensitively across the roster
    pub name: String,
    /// Name of whoever submitted this guest, when they gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub descriptor: Descriptor,
    pub joined_at: DateTime<Utc>,
    /// Seeded celebrity entries present before any submission
    pub founder: bool,
}

impl GuestEntry {
    pub fn new(name: String, owner: Option<String>, descriptor: Descriptor) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            owner,
            descriptor,
            joined_at: Utc::now(),
            founder: false,
        }
    }

    /// A seeded celebrity entry
    pub fn founder(name: &str, glyph: &str, tagline: &str, shirt: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            owner: None,
            descriptor: Descriptor::new(glyph, shirt, tagline),
            joined_at: Utc::now(),
            founder: true,
        }
    }
}
