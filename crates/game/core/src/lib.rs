//! Deterministic score-keeping domain shared across clients.
//!
//! `pacman-core` defines the authoritative score table ([`ScoreBoard`]), the
//! owning game session object, and the domain error type. All mutation flows
//! through `ScoreBoard`'s validated operations; presentation crates only read
//! the display strings and typed entries re-exported here.
pub mod error;
pub mod score;
pub mod session;

pub use error::ScoreError;
pub use score::{ScoreBoard, ScoreEntry};
pub use session::GameSession;
