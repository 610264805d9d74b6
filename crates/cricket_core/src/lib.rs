//! # cricket_core - Ball-by-Ball Cricket Match Scoring Engine
//!
//! This library provides a pure, snapshot-based cricket scoring engine
//! with a JSON API for easy integration with HTTP services and CLIs.
//!
//! ## Features
//! - Full ball-by-ball ledger with extras, wickets and strike rotation
//! - Every transition returns a new snapshot; errors leave the input intact
//! - Undo of any recorded delivery, including across an innings break
//! - Career statistics and maintenance rewrites over stored histories
//! - JSON API for easy integration

pub mod admin;
pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod stats;

// Re-export main API functions
pub use api::{apply_ball_json, create_match_json, undo_last_ball_json, CreateMatchRequest};
pub use error::{Result, ScoreError};

// Re-export core model types
pub use models::{
    BallEvent, BallInput, BattingFigures, BowlingFigures, Extras, Innings, Match, MatchResult,
    MatchSetup, MatchStatus,
};

// Re-export engine transitions
pub use engine::{apply_ball, undo_last_ball};

// Re-export statistics and maintenance helpers
pub use admin::{delete_player, list_players, rename_player, AdminReport, DELETED_PLAYER};
pub use stats::{aggregate_players, player_career, CareerBatting, CareerBowling, PlayerCareer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(overs: u32) -> String {
        json!({
            "schema_version": 1,
            "overs_per_innings": overs,
            "teams": ["Tigers", "Lions"],
            "players_per_team": 11
        })
        .to_string()
    }

    fn ball(body: serde_json::Value) -> String {
        body.to_string()
    }

    #[test]
    fn test_full_match_over_json_api() {
        // One over per side. Tigers post 7; Lions reach 8 with a ball to spare.
        let mut snapshot = create_match_json(&create_request(1)).unwrap();

        snapshot = apply_ball_json(
            &snapshot,
            &ball(json!({"runs": 6, "striker": "Asha", "non_striker": "Bina", "bowler": "Zoya"})),
        )
        .unwrap();
        snapshot = apply_ball_json(&snapshot, &ball(json!({"runs": 0, "is_wide": true}))).unwrap();
        for _ in 0..5 {
            snapshot = apply_ball_json(&snapshot, &ball(json!({"runs": 0}))).unwrap();
        }

        let parsed: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed["current_innings"], 2);
        assert_eq!(parsed["innings"][0]["runs"], 7);
        assert_eq!(parsed["innings"][0]["extras"]["wides"], 1);
        assert_eq!(parsed["batting_team"], "Lions");

        snapshot = apply_ball_json(
            &snapshot,
            &ball(json!({"runs": 4, "striker": "Lata", "non_striker": "Mira", "bowler": "Asha"})),
        )
        .unwrap();
        for _ in 0..3 {
            snapshot = apply_ball_json(&snapshot, &ball(json!({"runs": 1}))).unwrap();
        }
        snapshot = apply_ball_json(&snapshot, &ball(json!({"runs": 1}))).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed["status"], "completed");
        assert_eq!(parsed["result"]["winner"], "Lions");
        assert_eq!(parsed["result"]["is_draw"], false);

        // A completed match rejects further deliveries.
        let rejected = apply_ball_json(&snapshot, &ball(json!({"runs": 1})));
        assert!(matches!(rejected, Err(ScoreError::InningsComplete)));

        // But undo reopens it.
        let reopened = undo_last_ball_json(&snapshot).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&reopened).unwrap();
        assert_eq!(parsed["status"], "in_progress");
        assert!(parsed["result"].is_null());
    }

    #[test]
    fn test_snapshot_survives_serde_round_trip() {
        let snapshot = create_match_json(&create_request(20)).unwrap();
        let snapshot = apply_ball_json(
            &snapshot,
            &ball(json!({"runs": 2, "striker": "Asha", "non_striker": "Bina", "bowler": "Zoya"})),
        )
        .unwrap();

        let parsed: Match = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed.schema_version, SCHEMA_VERSION);
        let again = serde_json::to_string(&parsed).unwrap();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn test_history_feeds_career_stats() {
        let mut snapshot = create_match_json(&create_request(1)).unwrap();
        snapshot = apply_ball_json(
            &snapshot,
            &ball(json!({"runs": 4, "striker": "Asha", "non_striker": "Bina", "bowler": "Zoya"})),
        )
        .unwrap();
        let m: Match = serde_json::from_str(&snapshot).unwrap();

        let careers = aggregate_players(&[m]);
        assert_eq!(careers[0].name, "Asha");
        assert_eq!(careers[0].batting.fours, 1);
    }
}
