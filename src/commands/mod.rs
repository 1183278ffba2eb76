//! Command implementations

pub mod play;
pub mod score;

pub use play::run_play;
pub use score::run_score;
