use serde::{Deserialize, Serialize};

/// Body of `POST /tracks`. There is no user field: the owner of
/// the record always comes from the verified token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackForm {
    pub track_name: String,
    #[serde(alias = "completedId")]
    pub completed_checkpoint_id: i32,
}
