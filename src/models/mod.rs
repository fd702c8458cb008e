mod claims;
mod track;

pub use claims::*;
pub use track::*;
