//! Property tests: apply/undo inversion and ledger invariants under random
//! valid ball sequences.

use proptest::prelude::*;

use super::{apply_ball, undo_last_ball};
use crate::error::ScoreError;
use crate::models::{BallInput, Match, MatchSetup, MatchStatus};

#[derive(Debug, Clone)]
struct GenBall {
    runs: u8,
    is_wide: bool,
    is_no_ball: bool,
    is_wicket: bool,
}

fn ball_strategy() -> impl Strategy<Value = GenBall> {
    (0u8..=6, 0u8..3, prop::bool::weighted(0.15)).prop_map(|(runs, extra, is_wicket)| GenBall {
        runs,
        is_wide: extra == 1,
        is_no_ball: extra == 2,
        is_wicket,
    })
}

fn small_match() -> Match {
    Match::new(MatchSetup {
        overs_per_innings: 2,
        teams: ["Tigers".to_string(), "Lions".to_string()],
        players_per_team: 5,
    })
    .unwrap()
}

fn fresh(prefix: &str, n: &mut u32) -> String {
    *n += 1;
    format!("{}{}", prefix, n)
}

/// Fill in whatever names the innings state cannot default, the way a
/// scoring client does: openers at the start of an innings, a bowler after
/// every over break, an incoming batsman on a wicket.
fn to_input(ball: &GenBall, m: &Match, next_player: &mut u32) -> BallInput {
    let innings = m.active_innings();
    let striker =
        if innings.striker.is_none() { Some(fresh("Bat", next_player)) } else { None };
    let non_striker =
        if innings.non_striker.is_none() { Some(fresh("Bat", next_player)) } else { None };
    let bowler =
        if innings.current_bowler.is_none() { Some(fresh("Bowl", next_player)) } else { None };
    let new_batsman = if ball.is_wicket { Some(fresh("Bat", next_player)) } else { None };
    BallInput {
        runs: ball.runs,
        is_wide: ball.is_wide,
        is_no_ball: ball.is_no_ball,
        is_wicket: ball.is_wicket,
        striker,
        non_striker,
        bowler,
        new_batsman,
    }
}

/// Strip the fields undo deliberately leaves behind: slot occupants, plus
/// figure rows the undone balls created and zeroed out again.
fn normalized(m: &Match) -> Match {
    let mut m = m.clone();
    for innings in &mut m.innings {
        innings.striker = None;
        innings.non_striker = None;
        innings.current_bowler = None;
        innings
            .player_stats
            .retain(|p| p.runs != 0 || p.balls != 0 || p.fours != 0 || p.sixes != 0 || p.is_out);
        innings
            .bowler_stats
            .retain(|b| b.overs != 0 || b.balls != 0 || b.runs != 0 || b.wickets != 0);
    }
    m
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_after_every_ball(balls in prop::collection::vec(ball_strategy(), 1..60)) {
        let mut m = small_match();
        let mut next_player = 0;

        for ball in &balls {
            if m.status == MatchStatus::Completed {
                break;
            }
            let input = to_input(ball, &m, &mut next_player);
            m = apply_ball(&m, &input).unwrap();

            for innings in &m.innings {
                let replayed: u32 = innings.ball_by_ball.iter().map(|b| b.team_runs()).sum();
                prop_assert_eq!(replayed, innings.runs);
                prop_assert!(innings.wickets <= m.wickets_limit());
                prop_assert!(innings.balls <= 5);
                let conceded: u32 = innings.bowler_stats.iter().map(|b| b.runs).sum();
                prop_assert_eq!(conceded, innings.runs);
            }
        }
    }

    #[test]
    fn undo_walks_back_to_the_initial_snapshot(balls in prop::collection::vec(ball_strategy(), 1..60)) {
        let initial = small_match();
        let mut m = initial.clone();
        let mut next_player = 0;
        let mut applied = 0;

        for ball in &balls {
            if m.status == MatchStatus::Completed {
                break;
            }
            let input = to_input(ball, &m, &mut next_player);
            m = apply_ball(&m, &input).unwrap();
            applied += 1;
        }

        for _ in 0..applied {
            m = undo_last_ball(&m).unwrap();
        }

        prop_assert!(matches!(undo_last_ball(&m), Err(ScoreError::NothingToUndo)));
        prop_assert_eq!(normalized(&initial), normalized(&m));
    }

    #[test]
    fn single_undo_inverts_single_apply(balls in prop::collection::vec(ball_strategy(), 2..30)) {
        let mut m = small_match();
        let mut next_player = 0;

        for ball in &balls {
            if m.status == MatchStatus::Completed {
                break;
            }
            let input = to_input(ball, &m, &mut next_player);
            let next = apply_ball(&m, &input).unwrap();
            let undone = undo_last_ball(&next).unwrap();
            prop_assert_eq!(normalized(&m), normalized(&undone));
            m = next;
        }
    }
}
