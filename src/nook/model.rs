use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(name: String, body: String) -> Self {
        Self {
            name,
            body,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archive {
    pub name: String,
    pub notes: Vec<Note>,
    pub created_at: DateTime<Utc>,
}

impl Archive {
    pub fn new(name: String) -> Self {
        Self {
            name,
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
