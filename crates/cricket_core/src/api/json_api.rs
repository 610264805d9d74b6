//! JSON boundary for collaborators (HTTP layer, CLI, tests).
//!
//! String in, string out: parse, run the pure transition, serialize the new
//! snapshot. Nothing here mutates stored state; persisting the returned
//! snapshot is the caller's job, and only after the whole call succeeded.

use serde::Deserialize;

use crate::engine::{apply_ball, undo_last_ball};
use crate::error::{Result, ScoreError};
use crate::models::{BallInput, Match, MatchSetup};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub schema_version: u8,
    pub overs_per_innings: u32,
    pub teams: [String; 2],
    pub players_per_team: u8,
}

fn check_schema_version(found: u8) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(ScoreError::SchemaVersionMismatch { found, expected: SCHEMA_VERSION })
    }
}

/// Create a new match snapshot from a `CreateMatchRequest` JSON document.
pub fn create_match_json(request: &str) -> Result<String> {
    let request: CreateMatchRequest = serde_json::from_str(request)?;
    check_schema_version(request.schema_version)?;
    let created = Match::new(MatchSetup {
        overs_per_innings: request.overs_per_innings,
        teams: request.teams,
        players_per_team: request.players_per_team,
    })?;
    Ok(serde_json::to_string(&created)?)
}

/// Apply one delivery (a `BallInput` JSON document) to a match snapshot.
pub fn apply_ball_json(match_json: &str, ball_json: &str) -> Result<String> {
    let current: Match = serde_json::from_str(match_json)?;
    check_schema_version(current.schema_version)?;
    let input: BallInput = serde_json::from_str(ball_json)?;
    let next = apply_ball(&current, &input)?;
    Ok(serde_json::to_string(&next)?)
}

/// Undo the last recorded delivery of a match snapshot.
pub fn undo_last_ball_json(match_json: &str) -> Result<String> {
    let current: Match = serde_json::from_str(match_json)?;
    check_schema_version(current.schema_version)?;
    let next = undo_last_ball(&current)?;
    Ok(serde_json::to_string(&next)?)
}
