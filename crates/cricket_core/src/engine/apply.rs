//! Forward scoring transition: apply one delivery to a match snapshot.

use chrono::Utc;
use log::{debug, info};

use crate::error::{Result, ScoreError};
use crate::models::{BallEvent, BallInput, Innings, Match, MatchResult, MatchStatus};

/// Apply one delivery and return the resulting snapshot.
///
/// Pure transition: the input snapshot is never mutated. On any error the
/// caller keeps the prior snapshot; no partial update is ever visible.
pub fn apply_ball(current: &Match, input: &BallInput) -> Result<Match> {
    if current.status == MatchStatus::Completed {
        return Err(ScoreError::InningsComplete);
    }
    input.validate()?;

    let mut next = current.clone();
    let innings_number = next.current_innings;
    let innings = next.active_innings_mut();

    // Client-supplied names overwrite the slots; otherwise the innings'
    // current occupants stay on.
    if input.striker.is_some() {
        innings.striker = input.striker.clone();
    }
    if input.non_striker.is_some() {
        innings.non_striker = input.non_striker.clone();
    }
    if input.bowler.is_some() {
        innings.current_bowler = input.bowler.clone();
    }

    let striker = innings
        .striker
        .clone()
        .ok_or_else(|| ScoreError::InvalidBall("no striker on strike and none supplied".to_string()))?;
    let bowler = innings
        .current_bowler
        .clone()
        .ok_or_else(|| ScoreError::InvalidBall("no bowler selected and none supplied".to_string()))?;

    // Figure rows exist from first sight, including a non-striker who never
    // faces a ball.
    innings.batting_mut(&striker);
    if let Some(non_striker) = innings.non_striker.clone() {
        innings.batting_mut(&non_striker);
    }
    innings.bowling_mut(&bowler);

    let legal = input.is_legal_delivery();
    let runs = input.runs as u32;

    innings.ball_by_ball.push(BallEvent {
        ball_number: innings.ball_by_ball.len() as u32 + 1,
        runs: input.runs,
        is_wide: input.is_wide,
        is_no_ball: input.is_no_ball,
        is_wicket: input.is_wicket,
        striker: striker.clone(),
        bowler: bowler.clone(),
        timestamp: Utc::now(),
    });

    // Run accounting. Extras carry a one-run penalty on top of any runs off
    // the bat; only a no-ball credits the bat runs to the striker, and only
    // a legal delivery counts as a ball faced.
    if input.is_wide || input.is_no_ball {
        innings.runs += 1 + runs;
        if input.is_wide {
            innings.extras.wides += 1;
        } else {
            innings.extras.no_balls += 1;
            let figures = innings.batting_mut(&striker);
            figures.runs += runs;
            if input.runs == 4 {
                figures.fours += 1;
            }
            if input.runs == 6 {
                figures.sixes += 1;
            }
        }
        innings.bowling_mut(&bowler).runs += 1 + runs;
    } else {
        innings.runs += runs;
        let figures = innings.batting_mut(&striker);
        figures.runs += runs;
        figures.balls += 1;
        if input.runs == 4 {
            figures.fours += 1;
        }
        if input.runs == 6 {
            figures.sixes += 1;
        }
        innings.bowling_mut(&bowler).runs += runs;
    }

    // A wicket counts on any delivery type, wides included.
    if input.is_wicket {
        innings.wickets += 1;
        innings.batting_mut(&striker).is_out = true;
        innings.bowling_mut(&bowler).wickets += 1;
        if let Some(incoming) = &input.new_batsman {
            innings.batting_mut(incoming);
            innings.striker = Some(incoming.clone());
        }
    }

    // Over/ball counters move on legal deliveries only. Completing an over
    // clears the bowler slot so the next ball must name a bowler.
    let mut over_completed = false;
    if legal {
        innings.balls += 1;
        let figures = innings.bowling_mut(&bowler);
        figures.balls += 1;
        if figures.balls == 6 {
            figures.balls = 0;
            figures.overs += 1;
        }
        if innings.balls == 6 {
            innings.balls = 0;
            innings.overs += 1;
            innings.current_bowler = None;
            over_completed = true;
            debug!(
                "over {} complete in innings {}: {}/{}",
                innings.overs, innings_number, innings.runs, innings.wickets
            );
        }
    }

    // Strike rotation: a completed over rotates regardless of runs, an odd
    // single on a legal non-wicket ball rotates too. Both together still
    // swap exactly once.
    let odd_single = legal && !input.is_wicket && input.runs % 2 == 1;
    if over_completed || odd_single {
        std::mem::swap(&mut innings.striker, &mut innings.non_striker);
    }

    evaluate_innings_end(&mut next, innings_number);
    Ok(next)
}

/// End-of-innings check and the resulting state transition.
fn evaluate_innings_end(next: &mut Match, innings_number: u8) {
    let (runs, wickets, total_overs) = {
        let innings = next.active_innings();
        (innings.runs, innings.wickets, innings.total_overs())
    };

    // Chase ends the moment the target is passed, even mid-over.
    let target_reached = match next.target() {
        Some(target) => runs >= target,
        None => false,
    };
    let innings_over =
        total_overs >= next.overs_per_innings as f64 || wickets >= next.wickets_limit();

    if !(target_reached || innings_over) {
        return;
    }

    if innings_number == 1 {
        info!(
            "innings 1 closed at {}/{} after {:.1} overs; {} need {} to win",
            runs,
            wickets,
            total_overs,
            next.teams[1],
            runs + 1
        );
        let batting = next.teams[1].clone();
        let bowling = next.teams[0].clone();
        next.current_innings = 2;
        next.batting_team = batting.clone();
        next.bowling_team = bowling.clone();
        next.innings.push(Innings::new(2, &batting, &bowling));
    } else {
        next.status = MatchStatus::Completed;
        next.result = Some(compute_result(next));
        if let Some(result) = &next.result {
            info!(
                "match complete: {} ({})",
                result.winner.as_deref().unwrap_or("no winner"),
                result.margin
            );
        }
    }
}

/// Compare the two innings totals and produce the match result.
fn compute_result(finished: &Match) -> MatchResult {
    let first = &finished.innings[0];
    let second = &finished.innings[1];

    if first.runs > second.runs {
        MatchResult {
            winner: Some(first.batting_team.clone()),
            margin: format!("{} runs", first.runs - second.runs),
            is_draw: false,
        }
    } else if second.runs > first.runs {
        let wickets_remaining = finished.wickets_limit() - second.wickets;
        MatchResult {
            winner: Some(second.batting_team.clone()),
            margin: format!("{} wickets", wickets_remaining),
            is_draw: false,
        }
    } else {
        MatchResult {
            winner: None,
            margin: "Match Tied".to_string(),
            is_draw: true,
        }
    }
}
