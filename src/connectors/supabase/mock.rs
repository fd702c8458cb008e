use super::ProgressStore;
use crate::connectors::errors::StoreError;
use crate::models::{NewTrack, Track};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory store that assigns sequential ids, starting at `next_id`.
pub struct MockProgressStore {
    rows: Mutex<Vec<Track>>,
    next_id: Mutex<i32>,
    attempts: AtomicUsize,
    failure: Option<StoreError>,
}

impl MockProgressStore {
    pub fn starting_at(first_id: i32) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(first_id),
            attempts: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// A store that rejects every insert with `err`.
    pub fn failing(err: StoreError) -> Self {
        Self {
            failure: Some(err),
            ..Self::starting_at(1)
        }
    }

    pub fn rows(&self) -> Vec<Track> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of inserts attempted, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for MockProgressStore {
    fn default() -> Self {
        Self::starting_at(101)
    }
}

#[async_trait]
impl ProgressStore for MockProgressStore {
    async fn insert_track(&self, track: &NewTrack) -> Result<Track, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut next_id = self.next_id.lock().unwrap();
        let row = Track {
            id: *next_id,
            user_id: track.user_id.clone(),
            track_name: track.track_name.clone(),
            completed_id: track.completed_id,
            created_at: Some(chrono::Utc::now()),
        };
        *next_id += 1;

        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}
