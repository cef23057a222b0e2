use serde::{Deserialize, Serialize};
use std::fmt;

use super::course::Scoring;
use crate::error::CoreError;

/// Two distinct player indices playing as partners.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Team([usize; 2]);

impl Team {
    /// # Errors
    /// Returns `CoreError::InvalidTeams` if both slots name the same player.
    pub fn new(a: usize, b: usize) -> Result<Self, CoreError> {
        if a == b {
            return Err(CoreError::InvalidTeams(format!(
                "player {a} cannot partner themselves"
            )));
        }
        Ok(Self([a, b]))
    }

    pub fn members(&self) -> [usize; 2] {
        self.0
    }

    pub fn contains(&self, player: usize) -> bool {
        self.0.contains(&player)
    }
}

impl TryFrom<[usize; 2]> for Team {
    type Error = CoreError;

    fn try_from(value: [usize; 2]) -> Result<Self, Self::Error> {
        Self::new(value[0], value[1])
    }
}

impl From<Team> for [usize; 2] {
    fn from(team: Team) -> Self {
        team.0
    }
}

/// Unvalidated wire form of [`TeamSplit`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct RawTeamSplit {
    pub team1: Team,
    pub team2: Team,
}

/// A 2v2 split of the group. The two teams never share a player.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "RawTeamSplit", into = "RawTeamSplit")]
pub struct TeamSplit {
    team1: Team,
    team2: Team,
}

impl TeamSplit {
    /// # Errors
    /// Returns `CoreError::InvalidTeams` if a player appears on both teams.
    pub fn new(team1: Team, team2: Team) -> Result<Self, CoreError> {
        if let Some(shared) = team1.members().into_iter().find(|&p| team2.contains(p)) {
            return Err(CoreError::InvalidTeams(format!(
                "player {shared} is on both teams"
            )));
        }
        Ok(Self { team1, team2 })
    }

    /// # Errors
    /// Returns `CoreError::InvalidTeams` for repeated indices.
    pub fn from_indices(team1: [usize; 2], team2: [usize; 2]) -> Result<Self, CoreError> {
        Self::new(Team::try_from(team1)?, Team::try_from(team2)?)
    }

    /// Caller guarantees four distinct indices.
    pub(crate) const fn new_unchecked(team1: [usize; 2], team2: [usize; 2]) -> Self {
        Self {
            team1: Team(team1),
            team2: Team(team2),
        }
    }

    pub fn team1(&self) -> Team {
        self.team1
    }

    pub fn team2(&self) -> Team {
        self.team2
    }

    pub fn teams(&self) -> [Team; 2] {
        [self.team1, self.team2]
    }

    /// True if every member index is below `player_count`.
    pub fn fits(&self, player_count: usize) -> bool {
        self.team1
            .members()
            .into_iter()
            .chain(self.team2.members())
            .all(|p| p < player_count)
    }

    /// The same partition with the sides swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            team1: self.team2,
            team2: self.team1,
        }
    }
}

impl TryFrom<RawTeamSplit> for TeamSplit {
    type Error = CoreError;

    fn try_from(raw: RawTeamSplit) -> Result<Self, Self::Error> {
        Self::new(raw.team1, raw.team2)
    }
}

impl From<TeamSplit> for RawTeamSplit {
    fn from(split: TeamSplit) -> Self {
        Self {
            team1: split.team1,
            team2: split.team2,
        }
    }
}

/// Stakes for the front nine, back nine and full eighteen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct NassauStakes {
    #[serde(default)]
    pub front: f64,
    #[serde(default)]
    pub back: f64,
    #[serde(default)]
    pub overall: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SixesMode {
    #[default]
    Match,
    Stroke,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum WagerInstance {
    /// Low total over 18 holes takes `stake` from every other player.
    IndividualStroke {
        #[serde(default)]
        scoring: Scoring,
        stake: f64,
    },
    /// Best-ball stroke play, team vs team.
    TeamStroke {
        #[serde(default)]
        scoring: Scoring,
        teams: TeamSplit,
        stakes: NassauStakes,
    },
    /// Best-ball net match play, team vs team.
    MatchPlay {
        teams: TeamSplit,
        stakes: NassauStakes,
    },
    Skins {
        #[serde(default)]
        scoring: Scoring,
        #[serde(default)]
        carry_over: bool,
        pot_per_player: f64,
    },
    /// Rotating partners over three six-hole legs.
    Sixes {
        #[serde(default)]
        mode: SixesMode,
        stake_per_segment: f64,
        #[serde(default)]
        pairings: Option<[TeamSplit; 3]>,
    },
}

impl fmt::Display for SixesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SixesMode::Match => "match",
            SixesMode::Stroke => "stroke",
        };
        write!(f, "{s}")
    }
}
