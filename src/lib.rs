#![forbid(unsafe_code)]

//! Scoreboard of live games: tracks the games being played and ranks them by total score.

pub mod game;
pub mod scoreboard;
pub mod team;
pub mod traits;

pub use game::{Game, GameError};
pub use scoreboard::{Scoreboard, ScoreboardError};
pub use team::{Team, TeamError};
pub use traits::{Clock, FixedClock, SystemClock};
