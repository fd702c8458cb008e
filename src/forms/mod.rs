pub mod track;

pub use track::TrackForm;
