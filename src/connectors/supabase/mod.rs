//! Supabase connector module
//!
//! The progress store is reached only through [`ProgressStore`], so the recorder
//! and the routes never depend on the HTTP details of the PostgREST API.

use crate::connectors::errors::StoreError;
use crate::models::{NewTrack, Track};
use async_trait::async_trait;

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::SupabaseClient;
#[cfg(test)]
pub use mock::MockProgressStore;

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Insert one row into the tracks table and return it as stored,
    /// including the store-assigned `id`.
    async fn insert_track(&self, track: &NewTrack) -> Result<Track, StoreError>;
}
