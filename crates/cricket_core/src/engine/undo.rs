//! Inverse scoring transition: remove the most recently applied delivery.
//!
//! Undo restores runs, wickets, extras, over/ball counters, and player
//! figures to their pre-ball values. Two fields are deliberately NOT
//! restored: the striker/non-striker order
//! and a `current_bowler` slot that the forward transition cleared at an
//! over boundary. The recorded event does not carry enough state to rebuild
//! them, and collaborators resupply all three names with the next delivery,
//! so inheriting the behavior keeps the client contract unchanged. Tests
//! assert this asymmetry explicitly.

use log::debug;

use crate::error::{Result, ScoreError};
use crate::models::{Match, MatchStatus};

/// Undo the last recorded delivery and return the resulting snapshot.
///
/// Pure transition, like the forward path: the input snapshot is never
/// mutated, and on error the caller keeps it unchanged.
pub fn undo_last_ball(current: &Match) -> Result<Match> {
    let mut next = current.clone();

    // A completed match reopens; the result no longer stands once its
    // deciding ball is removed.
    if next.status == MatchStatus::Completed {
        next.status = MatchStatus::InProgress;
        next.result = None;
        debug!("reopened completed match for undo");
    }

    // Undoing past the innings break discards the untouched second innings
    // and steps the match pointers back, mirroring the transition that
    // created it.
    if next.current_innings == 2 && next.active_innings().ball_by_ball.is_empty() {
        next.innings.pop();
        next.current_innings = 1;
        next.batting_team = next.teams[0].clone();
        next.bowling_team = next.teams[1].clone();
        debug!("discarded empty second innings");
    }

    let innings = next.active_innings_mut();
    let event = match innings.ball_by_ball.pop() {
        Some(event) => event,
        None => return Err(ScoreError::NothingToUndo),
    };
    let runs = event.runs as u32;

    // Reverse run and extras accounting, against the names the event
    // recorded rather than whatever occupies the slots now.
    if event.is_wide || event.is_no_ball {
        innings.runs -= 1 + runs;
        if event.is_wide {
            innings.extras.wides -= 1;
        } else {
            innings.extras.no_balls -= 1;
            let figures = innings.batting_mut(&event.striker);
            figures.runs -= runs;
            if event.runs == 4 {
                figures.fours -= 1;
            }
            if event.runs == 6 {
                figures.sixes -= 1;
            }
        }
        innings.bowling_mut(&event.bowler).runs -= 1 + runs;
    } else {
        innings.runs -= runs;
        let figures = innings.batting_mut(&event.striker);
        figures.runs -= runs;
        figures.balls -= 1;
        if event.runs == 4 {
            figures.fours -= 1;
        }
        if event.runs == 6 {
            figures.sixes -= 1;
        }
        innings.bowling_mut(&event.bowler).runs -= runs;

        // Ball/over counters: borrow an over back when the ball being
        // undone completed one.
        if innings.balls == 0 {
            innings.balls = 5;
            if innings.overs > 0 {
                innings.overs -= 1;
            }
        } else {
            innings.balls -= 1;
        }
        let figures = innings.bowling_mut(&event.bowler);
        if figures.balls == 0 {
            figures.balls = 5;
            if figures.overs > 0 {
                figures.overs -= 1;
            }
        } else {
            figures.balls -= 1;
        }
    }

    if event.is_wicket {
        innings.wickets -= 1;
        innings.batting_mut(&event.striker).is_out = false;
        innings.bowling_mut(&event.bowler).wickets -= 1;
    }

    Ok(next)
}
