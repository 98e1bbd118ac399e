use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A team taking part in games. The name is trimmed and never empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Team {
    name: String,
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum TeamError {
    /// The team name is empty or only whitespace.
    #[error("the team name cannot be empty")]
    InvalidName,
}

impl Team {
    /// Creates a new team, trimming surrounding whitespace from `name`.
    pub fn new(name: impl AsRef<str>) -> Result<Team, TeamError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TeamError::InvalidName);
        }

        Ok(Team {
            name: name.to_owned(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Team {
    type Error = TeamError;

    #[inline]
    fn try_from(name: String) -> Result<Self, Self::Error> {
        Team::new(name)
    }
}

impl From<Team> for String {
    #[inline]
    fn from(team: Team) -> Self {
        team.name
    }
}

impl AsRef<str> for Team {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
