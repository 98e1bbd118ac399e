use crate::game::{validate_score, Game, GameError};
use crate::team::Team;
use crate::traits::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use indexmap::{Equivalent, IndexMap};
use itertools::Itertools;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, trace};

/// Registry of the games currently being played.
///
/// Games are identified by the ordered `(home, away)` pair of team names: at most one game per pair
/// can be registered, while `(A, B)` and `(B, A)` are distinct games.
#[derive(Debug)]
pub struct Scoreboard<C: Clock = SystemClock> {
    games: IndexMap<GameKey, Game>, // Kept in registration order
    clock: C,
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum ScoreboardError {
    /// A game between the two teams is already registered.
    #[error("a game between {0:?} (home) and {1:?} (away) already exists")]
    GameAlreadyExists(String, String),
    /// No game between the two teams is registered.
    #[error("no game between {0:?} (home) and {1:?} (away) was found")]
    GameNotFound(String, String),
    /// The game rejected the operation.
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, Eq, PartialEq, Hash)]
struct GameKey {
    home: String,
    away: String,
}

// Must hash exactly like GameKey, so that lookups don't need to allocate
#[derive(Hash)]
struct GameKeyRef<'a> {
    home: &'a str,
    away: &'a str,
}

impl<'a> GameKeyRef<'a> {
    #[inline]
    fn new(home_team: &'a Team, away_team: &'a Team) -> Self {
        GameKeyRef {
            home: home_team.name(),
            away: away_team.name(),
        }
    }

    #[inline]
    fn to_owned_key(&self) -> GameKey {
        GameKey {
            home: self.home.to_owned(),
            away: self.away.to_owned(),
        }
    }

    #[inline]
    fn not_found(&self) -> ScoreboardError {
        ScoreboardError::GameNotFound(self.home.to_owned(), self.away.to_owned())
    }
}

impl Equivalent<GameKey> for GameKeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &GameKey) -> bool {
        self.home == key.home && self.away == key.away
    }
}

impl Scoreboard<SystemClock> {
    /// Creates an empty scoreboard using the system clock.
    #[inline]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty scoreboard with room for `capacity` games, using the system clock.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Scoreboard {
            games: IndexMap::with_capacity(capacity),
            clock: SystemClock,
        }
    }
}

impl Default for Scoreboard<SystemClock> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Scoreboard<C> {
    /// Creates an empty scoreboard which takes the default start time of games from `clock`.
    #[inline]
    pub fn with_clock(clock: C) -> Self {
        Scoreboard {
            games: IndexMap::new(),
            clock,
        }
    }

    /// Starts a new game with no points, starting now.
    #[inline]
    pub fn start_game(
        &mut self,
        home_team: &Team,
        away_team: &Team,
    ) -> Result<&Game, ScoreboardError> {
        self.start_game_with(home_team, away_team, 0, 0, None)
    }

    /// Starts a new game with the provided initial scores.
    ///
    /// If `start_time` is [`None`] the game starts at the current time of the scoreboard's clock.
    pub fn start_game_with(
        &mut self,
        home_team: &Team,
        away_team: &Team,
        home_score: i32,
        away_score: i32,
        start_time: Option<DateTime<Utc>>,
    ) -> Result<&Game, ScoreboardError> {
        let key = GameKeyRef::new(home_team, away_team);
        if self.games.contains_key(&key) {
            return Err(ScoreboardError::GameAlreadyExists(
                key.home.to_owned(),
                key.away.to_owned(),
            ));
        }

        let start_time = start_time.unwrap_or_else(|| self.clock.now());
        let mut game = Game::new(
            home_team.clone(),
            away_team.clone(),
            home_score,
            away_score,
            start_time,
        )?;
        game.start()?;

        let (index, _) = self.games.insert_full(key.to_owned_key(), game);
        debug!(
            home = %home_team,
            away = %away_team,
            home_score,
            away_score,
            %start_time,
            "game started"
        );
        Ok(&self.games[index])
    }

    /// Replaces both scores of a registered game.
    ///
    /// Scores are validated before any of them is stored, so a failed update leaves the game untouched.
    pub fn update_score(
        &mut self,
        home_team: &Team,
        away_team: &Team,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), ScoreboardError> {
        let key = GameKeyRef::new(home_team, away_team);
        let game = self.games.get_mut(&key).ok_or_else(|| key.not_found())?;

        validate_score(home_score)?;
        validate_score(away_score)?;
        game.set_home_score(home_score)?;
        game.set_away_score(away_score)?;

        trace!(home = %home_team, away = %away_team, home_score, away_score, "score updated");
        Ok(())
    }

    /// Finishes a registered game and removes it from the scoreboard.
    ///
    /// A registered game which is not in progress is left as is.
    pub fn finish_game(
        &mut self,
        home_team: &Team,
        away_team: &Team,
    ) -> Result<(), ScoreboardError> {
        let key = GameKeyRef::new(home_team, away_team);
        let game = self.games.get_mut(&key).ok_or_else(|| key.not_found())?;

        if !game.is_in_progress() {
            debug!(
                home = %home_team,
                away = %away_team,
                "game is not in progress, not removing it"
            );
            return Ok(());
        }

        game.finish()?;
        self.games.shift_remove(&key);
        debug!(home = %home_team, away = %away_team, "game finished");
        Ok(())
    }

    /// Returns the game between the two teams, if registered.
    #[inline]
    pub fn game(&self, home_team: &Team, away_team: &Team) -> Option<&Game> {
        self.games.get(&GameKeyRef::new(home_team, away_team))
    }

    /// Returns the registered games. Unless `include_finished` is `true`, only games in progress
    /// are returned.
    ///
    /// The order of the games is unspecified.
    pub fn games(&self, include_finished: bool) -> impl Iterator<Item = &Game> + '_ {
        self.games
            .values()
            .filter(move |game| include_finished || game.is_in_progress())
    }

    /// Returns the registered games ordered by total score, highest first.
    ///
    /// Games with the same total score are ordered by start time, most recent first. If they also
    /// started at the same time, the most recently registered one comes first.
    pub fn summary(&self) -> Vec<&Game> {
        // Reversed registration order + stable sort = registration tie-break
        self.games
            .values()
            .rev()
            .sorted_by(|g1, g2| summary_order(g1, g2))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[inline]
fn summary_order(g1: &Game, g2: &Game) -> Ordering {
    g1.total_score()
        .cmp(&g2.total_score())
        .then(g1.start_time().cmp(&g2.start_time()))
        .reverse()
}
