use crate::team::Team;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// A game between a home and an away team.
///
/// A game is created not started; [`Game::start`] and [`Game::finish`] move it in and out of
/// progress exactly once each.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Game {
    home_team: Team,
    away_team: Team,
    home_score: i32,
    away_score: i32,
    in_progress: bool,
    start_time: DateTime<Utc>,
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum GameError {
    /// The home and away teams have the same name.
    #[error("the home and away teams must be different (both are {0:?})")]
    DuplicateTeamName(String),
    /// A negative score was provided.
    #[error("the score must be a non-negative integer ({0} was provided)")]
    InvalidScore(i32),
    /// The game was started while already in progress.
    #[error("the game is already in progress")]
    AlreadyInProgress,
    /// The game was finished while not in progress.
    #[error("the game is not in progress")]
    NotInProgress,
}

impl Game {
    /// Creates a new game which is not in progress yet.
    pub fn new(
        home_team: Team,
        away_team: Team,
        home_score: i32,
        away_score: i32,
        start_time: DateTime<Utc>,
    ) -> Result<Game, GameError> {
        if home_team.name() == away_team.name() {
            return Err(GameError::DuplicateTeamName(home_team.name().to_owned()));
        }
        validate_score(home_score)?;
        validate_score(away_score)?;

        Ok(Game {
            home_team,
            away_team,
            home_score,
            away_score,
            in_progress: false,
            start_time,
        })
    }

    #[inline]
    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    #[inline]
    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    #[inline]
    pub fn home_score(&self) -> i32 {
        self.home_score
    }

    #[inline]
    pub fn away_score(&self) -> i32 {
        self.away_score
    }

    /// Replaces the home team score. Allowed whether or not the game is in progress.
    pub fn set_home_score(&mut self, score: i32) -> Result<(), GameError> {
        validate_score(score)?;
        self.home_score = score;
        Ok(())
    }

    /// Replaces the away team score. Allowed whether or not the game is in progress.
    pub fn set_away_score(&mut self, score: i32) -> Result<(), GameError> {
        validate_score(score)?;
        self.away_score = score;
        Ok(())
    }

    /// Sum of both scores.
    #[inline]
    pub fn total_score(&self) -> i64 {
        i64::from(self.home_score) + i64::from(self.away_score)
    }

    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    #[inline]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        if self.in_progress {
            return Err(GameError::AlreadyInProgress);
        }

        self.in_progress = true;
        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), GameError> {
        if !self.in_progress {
            return Err(GameError::NotInProgress);
        }

        self.in_progress = false;
        Ok(())
    }
}

#[inline]
pub(crate) fn validate_score(score: i32) -> Result<(), GameError> {
    if score < 0 {
        Err(GameError::InvalidScore(score))
    } else {
        Ok(())
    }
}
