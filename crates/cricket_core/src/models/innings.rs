//! One team's batting turn: the ball log and its derived counters.

use serde::{Deserialize, Serialize};

use super::ball::BallEvent;

/// Penalty-run extras conceded by the bowling side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
}

/// Per-batsman figures within one innings.
///
/// Created lazily the first time a name appears as striker or non-striker,
/// never deleted during an innings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingFigures {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub is_out: bool,
}

impl BattingFigures {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            is_out: false,
        }
    }
}

/// Per-bowler figures within one innings. `balls` counts the current
/// incomplete over (0-5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingFigures {
    pub name: String,
    pub overs: u32,
    pub balls: u8,
    /// Runs conceded, extras penalties included.
    pub runs: u32,
    pub wickets: u32,
}

impl BowlingFigures {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            overs: 0,
            balls: 0,
            runs: 0,
            wickets: 0,
        }
    }
}

/// One innings: the append/pop-only ball log plus derived aggregates.
///
/// `runs` always equals the sum reconstructible from `ball_by_ball`; all
/// mutation goes through the scoring engine so apply and undo stay exact
/// inverses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    /// 1 or 2.
    pub innings_number: u8,
    pub batting_team: String,
    pub bowling_team: String,
    pub runs: u32,
    pub wickets: u32,
    /// Completed overs.
    pub overs: u32,
    /// Legal balls in the current over (0-5).
    pub balls: u8,
    pub extras: Extras,
    pub ball_by_ball: Vec<BallEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker: Option<String>,
    /// Cleared at over boundaries to force a new-bowler selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bowler: Option<String>,
    pub player_stats: Vec<BattingFigures>,
    pub bowler_stats: Vec<BowlingFigures>,
}

impl Innings {
    pub fn new(innings_number: u8, batting_team: &str, bowling_team: &str) -> Self {
        Self {
            innings_number,
            batting_team: batting_team.to_string(),
            bowling_team: bowling_team.to_string(),
            runs: 0,
            wickets: 0,
            overs: 0,
            balls: 0,
            extras: Extras::default(),
            ball_by_ball: Vec::new(),
            striker: None,
            non_striker: None,
            current_bowler: None,
            player_stats: Vec::new(),
            bowler_stats: Vec::new(),
        }
    }

    /// Overs bowled as a fraction, e.g. 4 overs 3 balls = 4.5.
    pub fn total_overs(&self) -> f64 {
        self.overs as f64 + self.balls as f64 / 6.0
    }

    pub fn batting(&self, name: &str) -> Option<&BattingFigures> {
        self.player_stats.iter().find(|p| p.name == name)
    }

    pub fn bowling(&self, name: &str) -> Option<&BowlingFigures> {
        self.bowler_stats.iter().find(|b| b.name == name)
    }

    /// Figures row for `name`, created on first sight. Rows keep their
    /// first-seen order so snapshots serialize stably.
    pub fn batting_mut(&mut self, name: &str) -> &mut BattingFigures {
        let idx = match self.player_stats.iter().position(|p| p.name == name) {
            Some(idx) => idx,
            None => {
                self.player_stats.push(BattingFigures::new(name));
                self.player_stats.len() - 1
            }
        };
        &mut self.player_stats[idx]
    }

    pub fn bowling_mut(&mut self, name: &str) -> &mut BowlingFigures {
        let idx = match self.bowler_stats.iter().position(|b| b.name == name) {
            Some(idx) => idx,
            None => {
                self.bowler_stats.push(BowlingFigures::new(name));
                self.bowler_stats.len() - 1
            }
        };
        &mut self.bowler_stats[idx]
    }
}
