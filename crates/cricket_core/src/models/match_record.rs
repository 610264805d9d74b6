//! Match aggregate: two innings, current-innings pointer, status and result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::innings::Innings;
use crate::error::{Result, ScoreError};

/// A side needs at least an opening pair.
pub const MIN_PLAYERS_PER_TEAM: u8 = 2;
pub const MAX_PLAYERS_PER_TEAM: u8 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Present in the persisted schema but unreachable from the creation
    /// path; matches are created directly in progress.
    NotStarted,
    InProgress,
    Completed,
}

/// Outcome of a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// `None` on a tie.
    pub winner: Option<String>,
    /// Display margin: `"{n} runs"`, `"{n} wickets"`, or `"Match Tied"`.
    pub margin: String,
    pub is_draw: bool,
}

/// Validated creation input for a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSetup {
    pub overs_per_innings: u32,
    pub teams: [String; 2],
    pub players_per_team: u8,
}

impl MatchSetup {
    pub fn validate(&self) -> Result<()> {
        if self.overs_per_innings == 0 {
            return Err(ScoreError::InvalidSetup(
                "overs_per_innings must be at least 1".to_string(),
            ));
        }
        if self.teams.iter().any(|t| t.trim().is_empty()) {
            return Err(ScoreError::InvalidSetup("team names must be non-empty".to_string()));
        }
        if self.teams[0] == self.teams[1] {
            return Err(ScoreError::InvalidSetup("team names must be distinct".to_string()));
        }
        if !(MIN_PLAYERS_PER_TEAM..=MAX_PLAYERS_PER_TEAM).contains(&self.players_per_team) {
            return Err(ScoreError::InvalidSetup(format!(
                "players_per_team must be {}..={}, got {}",
                MIN_PLAYERS_PER_TEAM, MAX_PLAYERS_PER_TEAM, self.players_per_team
            )));
        }
        Ok(())
    }
}

/// The full match snapshot handed to collaborators.
///
/// The match exclusively owns its innings list; each innings exclusively
/// owns its ball log and figure rows. Snapshots are immutable once handed
/// out; the engine clones, mutates the clone, and returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub schema_version: u8,
    pub overs_per_innings: u32,
    pub teams: [String; 2],
    pub players_per_team: u8,
    /// 1 or 2; mirrors `innings.len()`.
    pub current_innings: u8,
    pub batting_team: String,
    pub bowling_team: String,
    pub status: MatchStatus,
    pub innings: Vec<Innings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a match directly in progress with its first innings open.
    pub fn new(setup: MatchSetup) -> Result<Self> {
        setup.validate()?;
        let MatchSetup { overs_per_innings, teams, players_per_team } = setup;
        let first = Innings::new(1, &teams[0], &teams[1]);
        Ok(Self {
            schema_version: crate::SCHEMA_VERSION,
            overs_per_innings,
            batting_team: teams[0].clone(),
            bowling_team: teams[1].clone(),
            teams,
            players_per_team,
            current_innings: 1,
            status: MatchStatus::InProgress,
            innings: vec![first],
            result: None,
            created_at: Utc::now(),
        })
    }

    pub fn active_innings(&self) -> &Innings {
        &self.innings[self.current_innings as usize - 1]
    }

    pub fn active_innings_mut(&mut self) -> &mut Innings {
        &mut self.innings[self.current_innings as usize - 1]
    }

    /// Runs the chasing side needs to win; `None` during the first innings.
    pub fn target(&self) -> Option<u32> {
        if self.current_innings == 2 {
            Some(self.innings[0].runs + 1)
        } else {
            None
        }
    }

    /// Maximum wickets that can fall in an innings.
    pub fn wickets_limit(&self) -> u32 {
        self.players_per_team as u32 - 1
    }
}
