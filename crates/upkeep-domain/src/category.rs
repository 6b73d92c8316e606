//! Domain types representing user-defined categories.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Groups contracts or purchases for summaries and navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Translation key for seeded categories; user-created ones have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_key: Option<String>,
    pub kind: CategoryKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            name_key: None,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = Some(key.into());
        self
    }
}

/// Which record family a category organizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Contracts,
    Purchases,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Contracts => "contracts",
            CategoryKind::Purchases => "purchases",
        };
        f.write_str(label)
    }
}
