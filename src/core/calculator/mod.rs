pub mod macros;
pub mod progress;
pub mod target;
