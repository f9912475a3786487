//! Cross-frontend primitives for presenting the game.
//!
//! Houses the observable string property, the score view model, and the
//! activity feed that both the CLI and future graphical clients can reuse.
pub mod activity;
pub mod property;
pub mod view_model;

pub use activity::ActivityLog;
pub use property::StringProperty;
pub use view_model::{ScoreViewModel, SortMode};
