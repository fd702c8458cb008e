use crate::connectors::{ProgressStore, StoreError};
use crate::models::NewTrack;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum RecordFailure {
    #[error("subject identifier is empty")]
    EmptySubject,
    #[error("failed to insert progress record: {0}")]
    Store(#[from] StoreError),
}

/// Persists checkpoint completions, one store insert per call.
///
/// There is no retry and no deduplication: recording the same payload twice
/// produces two rows with two ids.
#[derive(Clone)]
pub struct ProgressRecorder {
    store: Arc<dyn ProgressStore>,
}

impl ProgressRecorder {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }

    /// Returns the id the store assigned to the new row.
    ///
    /// `subject_id` must come from a verified credential. `track_name` and
    /// `completed_checkpoint_id` are stored as received.
    #[tracing::instrument(name = "Record track progress.", skip(self))]
    pub async fn record(
        &self,
        subject_id: &str,
        track_name: &str,
        completed_checkpoint_id: i32,
    ) -> Result<i32, RecordFailure> {
        if subject_id.trim().is_empty() {
            return Err(RecordFailure::EmptySubject);
        }

        let track = NewTrack::new(subject_id, track_name, completed_checkpoint_id);
        let saved = self.store.insert_track(&track).await?;

        tracing::info!("New track progress {} has been saved", saved.id);
        Ok(saved.id)
    }
}

impl std::fmt::Debug for ProgressRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressRecorder").finish_non_exhaustive()
    }
}
