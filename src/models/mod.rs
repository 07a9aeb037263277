// Data models (structs)
pub mod processing;
pub mod settings;

pub use processing::*;
pub use settings::*;
