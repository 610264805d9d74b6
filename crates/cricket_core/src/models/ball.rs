//! Ball event model: one delivery's outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Maximum runs off the bat on a single delivery.
pub const MAX_BAT_RUNS: u8 = 6;

/// Client-supplied description of one delivery, validated at the boundary.
///
/// Name fields are optional; when absent they default to the innings'
/// current striker/non-striker/bowler slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallInput {
    #[serde(default)]
    pub runs: u8,
    #[serde(default)]
    pub is_wide: bool,
    #[serde(default)]
    pub is_no_ball: bool,
    #[serde(default)]
    pub is_wicket: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowler: Option<String>,
    /// Incoming batsman taking the crease after a wicket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_batsman: Option<String>,
}

impl BallInput {
    pub fn validate(&self) -> Result<()> {
        if self.runs > MAX_BAT_RUNS {
            return Err(ScoreError::InvalidBall(format!(
                "runs must be 0..={}, got {}",
                MAX_BAT_RUNS, self.runs
            )));
        }
        if self.is_wide && self.is_no_ball {
            return Err(ScoreError::InvalidBall(
                "a delivery cannot be both a wide and a no-ball".to_string(),
            ));
        }
        Ok(())
    }

    /// Neither a wide nor a no-ball.
    pub fn is_legal_delivery(&self) -> bool {
        !self.is_wide && !self.is_no_ball
    }
}

/// One delivery's outcome, append-only within an innings log.
///
/// `ball_number` is 1-based and contiguous within the innings; the log index
/// is always `ball_number - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallEvent {
    pub ball_number: u32,
    pub runs: u8,
    pub is_wide: bool,
    pub is_no_ball: bool,
    pub is_wicket: bool,
    /// Batsman on strike when this ball was bowled.
    pub striker: String,
    pub bowler: String,
    pub timestamp: DateTime<Utc>,
}

impl BallEvent {
    pub fn is_legal_delivery(&self) -> bool {
        !self.is_wide && !self.is_no_ball
    }

    /// Total added to the batting side's score by this delivery, extras
    /// penalty included.
    pub fn team_runs(&self) -> u32 {
        if self.is_legal_delivery() {
            self.runs as u32
        } else {
            1 + self.runs as u32
        }
    }
}
