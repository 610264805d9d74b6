//! Maintenance rewrites over stored match history.
//!
//! Player names are plain strings repeated across snapshots, so a rename or
//! removal has to touch every slot, figure row and ledger entry that carries
//! the old name. These helpers rewrite a whole history in one pass and report
//! what they touched.

use log::info;

use crate::error::{Result, ScoreError};
use crate::models::Match;

/// Placeholder written into the ball-by-ball ledger for a removed player.
/// Ledger entries are never deleted; the delivery still happened.
pub const DELETED_PLAYER: &str = "Deleted Player";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminReport {
    pub matches_affected: u32,
    pub records_updated: u32,
}

fn validated(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoreError::InvalidName("player name must not be empty".to_string()));
    }
    Ok(name)
}

fn rewrite_slot(slot: &mut Option<String>, old: &str, new: Option<&str>, updated: &mut u32) {
    if slot.as_deref() == Some(old) {
        *slot = new.map(str::to_string);
        *updated += 1;
    }
}

/// Rename a player everywhere they appear across the given matches.
pub fn rename_player(matches: &mut [Match], old: &str, new: &str) -> Result<AdminReport> {
    let old = validated(old)?;
    let new = validated(new)?;
    if old == new {
        return Err(ScoreError::InvalidName(
            "new name must differ from the old name".to_string(),
        ));
    }

    let mut report = AdminReport::default();
    for m in matches.iter_mut() {
        let mut updated = 0;
        for innings in &mut m.innings {
            rewrite_slot(&mut innings.striker, old, Some(new), &mut updated);
            rewrite_slot(&mut innings.non_striker, old, Some(new), &mut updated);
            rewrite_slot(&mut innings.current_bowler, old, Some(new), &mut updated);
            for figures in &mut innings.player_stats {
                if figures.name == old {
                    figures.name = new.to_string();
                    updated += 1;
                }
            }
            for figures in &mut innings.bowler_stats {
                if figures.name == old {
                    figures.name = new.to_string();
                    updated += 1;
                }
            }
            for ball in &mut innings.ball_by_ball {
                if ball.striker == old {
                    ball.striker = new.to_string();
                    updated += 1;
                }
                if ball.bowler == old {
                    ball.bowler = new.to_string();
                    updated += 1;
                }
            }
        }
        if updated > 0 {
            report.matches_affected += 1;
            report.records_updated += updated;
        }
    }

    info!(
        "renamed player '{}' to '{}': {} records across {} matches",
        old, new, report.records_updated, report.matches_affected
    );
    Ok(report)
}

/// Remove a player from the given matches: figure rows are dropped, occupied
/// slots are vacated, and ledger entries fall back to [`DELETED_PLAYER`].
pub fn delete_player(matches: &mut [Match], name: &str) -> Result<AdminReport> {
    let name = validated(name)?;

    let mut report = AdminReport::default();
    for m in matches.iter_mut() {
        let mut updated = 0;
        for innings in &mut m.innings {
            rewrite_slot(&mut innings.striker, name, None, &mut updated);
            rewrite_slot(&mut innings.non_striker, name, None, &mut updated);
            rewrite_slot(&mut innings.current_bowler, name, None, &mut updated);

            let before = innings.player_stats.len();
            innings.player_stats.retain(|p| p.name != name);
            updated += (before - innings.player_stats.len()) as u32;

            let before = innings.bowler_stats.len();
            innings.bowler_stats.retain(|b| b.name != name);
            updated += (before - innings.bowler_stats.len()) as u32;

            for ball in &mut innings.ball_by_ball {
                if ball.striker == name {
                    ball.striker = DELETED_PLAYER.to_string();
                    updated += 1;
                }
                if ball.bowler == name {
                    ball.bowler = DELETED_PLAYER.to_string();
                    updated += 1;
                }
            }
        }
        if updated > 0 {
            report.matches_affected += 1;
            report.records_updated += updated;
        }
    }

    info!(
        "deleted player '{}': {} records across {} matches",
        name, report.records_updated, report.matches_affected
    );
    Ok(report)
}

/// Every distinct player name found in the given matches, sorted.
pub fn list_players(matches: &[Match]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for m in matches {
        for innings in &m.innings {
            for figures in &innings.player_stats {
                names.push(figures.name.clone());
            }
            for figures in &innings.bowler_stats {
                names.push(figures.name.clone());
            }
        }
    }
    names.sort();
    names.dedup();
    names
}
