pub mod health_checks;
pub mod track;

pub use health_checks::*;
