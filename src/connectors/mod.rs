//! External Service Connectors
//!
//! Adapters for the services this API depends on. Today that is only the
//! Supabase table that holds progress records.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `{service}/mod.rs` → allows mocking in tests
//! 2. Implement HTTP client in `{service}/client.rs`
//! 3. Inject trait object into services → routes never depend on HTTP implementation
//!
//! ## Testing
//!
//! ```ignore
//! #[cfg(test)]
//! mod tests {
//!     use crate::connectors::supabase::MockProgressStore;
//!
//!     #[tokio::test]
//!     async fn test_record_without_http() {
//!         let store = Arc::new(MockProgressStore::default());
//!         let recorder = ProgressRecorder::new(store.clone());
//!         // Test recorder logic without external API calls
//!     }
//! }
//! ```

pub mod errors;
pub mod supabase;

pub use errors::StoreError;
pub use supabase::{ProgressStore, SupabaseClient};
