use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A checkpoint completion as stored in the `tracks` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: i32,
    pub user_id: String, // subject of the token that authorized the insert
    pub track_name: String,
    pub completed_id: i32, // the checkpoint (node) id that was completed
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>, // populated by the store
}

/// A track row that has not been inserted yet. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTrack {
    pub user_id: String,
    pub track_name: String,
    pub completed_id: i32,
}

impl NewTrack {
    pub fn new(user_id: impl Into<String>, track_name: impl Into<String>, completed_id: i32) -> Self {
        Self {
            user_id: user_id.into(),
            track_name: track_name.into(),
            completed_id,
        }
    }
}
