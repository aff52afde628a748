//! Game sessions: player registration, turn order, and results.

mod session;

pub use session::MancalaGame;
