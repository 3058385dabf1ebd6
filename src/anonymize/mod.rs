pub mod kanon;
pub mod mask;

pub use kanon::*;
pub use mask::*;
