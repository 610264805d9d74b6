//! Career statistics aggregated across stored match snapshots.
//!
//! Read-only reporting over whatever matches the collaborator has persisted;
//! nothing here feeds back into the scoring engine.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::Match;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerBatting {
    pub matches: u32,
    pub innings: u32,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub not_outs: u32,
    pub outs: u32,
    pub high_score: u32,
}

impl CareerBatting {
    /// Runs per dismissal; career runs when never dismissed.
    pub fn average(&self) -> f64 {
        if self.outs > 0 {
            self.runs as f64 / self.outs as f64
        } else {
            self.runs as f64
        }
    }

    /// Runs per 100 balls faced.
    pub fn strike_rate(&self) -> f64 {
        if self.balls > 0 {
            self.runs as f64 / self.balls as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Best single-innings bowling return: most wickets, fewest runs as the
/// tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestBowling {
    pub wickets: u32,
    pub runs: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerBowling {
    pub matches: u32,
    pub innings: u32,
    pub overs: u32,
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<BestBowling>,
}

impl CareerBowling {
    pub fn total_overs(&self) -> f64 {
        self.overs as f64 + self.balls as f64 / 6.0
    }

    /// Runs per wicket; `None` until the first wicket falls.
    pub fn average(&self) -> Option<f64> {
        if self.wickets > 0 {
            Some(self.runs as f64 / self.wickets as f64)
        } else {
            None
        }
    }

    /// Runs conceded per over bowled.
    pub fn economy(&self) -> f64 {
        let overs = self.total_overs();
        if overs > 0.0 {
            self.runs as f64 / overs
        } else {
            0.0
        }
    }

    /// Scorecard form, e.g. `"3/12"`, or `"-"` before the first bowl.
    pub fn best_figures(&self) -> String {
        match self.best {
            Some(best) => format!("{}/{}", best.wickets, best.runs),
            None => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCareer {
    pub name: String,
    pub batting: CareerBatting,
    pub bowling: CareerBowling,
    pub total_matches: u32,
}

impl PlayerCareer {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            batting: CareerBatting::default(),
            bowling: CareerBowling::default(),
            total_matches: 0,
        }
    }
}

struct Accum {
    career: PlayerCareer,
    batting_matches: HashSet<usize>,
    bowling_matches: HashSet<usize>,
}

impl Accum {
    fn new(name: &str) -> Self {
        Self {
            career: PlayerCareer::new(name),
            batting_matches: HashSet::new(),
            bowling_matches: HashSet::new(),
        }
    }
}

/// Aggregate every player's batting and bowling figures across all given
/// matches, sorted by career runs (most first, name as tiebreak).
pub fn aggregate_players(matches: &[Match]) -> Vec<PlayerCareer> {
    let mut by_name: HashMap<String, Accum> = HashMap::new();

    for (match_idx, m) in matches.iter().enumerate() {
        for innings in &m.innings {
            for figures in &innings.player_stats {
                let entry = by_name
                    .entry(figures.name.clone())
                    .or_insert_with(|| Accum::new(&figures.name));
                let batting = &mut entry.career.batting;
                batting.innings += 1;
                batting.runs += figures.runs;
                batting.balls += figures.balls;
                batting.fours += figures.fours;
                batting.sixes += figures.sixes;
                if figures.is_out {
                    batting.outs += 1;
                } else {
                    batting.not_outs += 1;
                }
                if figures.runs > batting.high_score {
                    batting.high_score = figures.runs;
                }
                entry.batting_matches.insert(match_idx);
            }

            for figures in &innings.bowler_stats {
                let entry = by_name
                    .entry(figures.name.clone())
                    .or_insert_with(|| Accum::new(&figures.name));
                let bowling = &mut entry.career.bowling;
                bowling.innings += 1;
                bowling.overs += figures.overs;
                bowling.balls += figures.balls as u32;
                bowling.runs += figures.runs;
                bowling.wickets += figures.wickets;
                let candidate = BestBowling { wickets: figures.wickets, runs: figures.runs };
                let better = match bowling.best {
                    None => true,
                    Some(best) => {
                        candidate.wickets > best.wickets
                            || (candidate.wickets == best.wickets && candidate.runs < best.runs)
                    }
                };
                if better {
                    bowling.best = Some(candidate);
                }
                entry.bowling_matches.insert(match_idx);
            }
        }
    }

    let mut players: Vec<PlayerCareer> = by_name
        .into_values()
        .map(|entry| {
            let mut career = entry.career;
            career.batting.matches = entry.batting_matches.len() as u32;
            career.bowling.matches = entry.bowling_matches.len() as u32;
            career.total_matches =
                entry.batting_matches.union(&entry.bowling_matches).count() as u32;
            career
        })
        .collect();

    players.sort_by(|a, b| {
        b.batting.runs.cmp(&a.batting.runs).then_with(|| a.name.cmp(&b.name))
    });
    players
}

/// Career line for a single player, if they appear anywhere in the history.
pub fn player_career(name: &str, matches: &[Match]) -> Option<PlayerCareer> {
    aggregate_players(matches).into_iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply_ball;
    use crate::models::{BallInput, MatchSetup};

    fn played_match() -> Match {
        // One-over match: Asha 4, 1; Bina 0*; Lions chase and fall short.
        let mut m = Match::new(MatchSetup {
            overs_per_innings: 1,
            teams: ["Tigers".to_string(), "Lions".to_string()],
            players_per_team: 11,
        })
        .unwrap();
        m = apply_ball(
            &m,
            &BallInput {
                runs: 4,
                striker: Some("Asha".to_string()),
                non_striker: Some("Bina".to_string()),
                bowler: Some("Zoya".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        m = apply_ball(&m, &BallInput { runs: 1, ..Default::default() }).unwrap();
        for _ in 0..3 {
            m = apply_ball(&m, &BallInput::default()).unwrap();
        }
        m = apply_ball(
            &m,
            &BallInput { is_wicket: true, new_batsman: Some("Car".to_string()), ..Default::default() },
        )
        .unwrap();
        assert_eq!(m.current_innings, 2);

        m = apply_ball(
            &m,
            &BallInput {
                runs: 2,
                striker: Some("Lata".to_string()),
                non_striker: Some("Mira".to_string()),
                bowler: Some("Asha".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        for _ in 0..5 {
            m = apply_ball(&m, &BallInput::default()).unwrap();
        }
        m
    }

    #[test]
    fn batting_lines_accumulate() {
        let matches = vec![played_match()];
        let players = aggregate_players(&matches);

        // Sorted by career runs: Asha leads with 5.
        assert_eq!(players[0].name, "Asha");
        let asha = &players[0];
        assert_eq!(asha.batting.runs, 5);
        assert_eq!(asha.batting.fours, 1);
        assert_eq!(asha.batting.high_score, 5);
        assert_eq!(asha.batting.innings, 1);
        assert_eq!(asha.total_matches, 1);
    }

    #[test]
    fn average_counts_only_dismissals() {
        let matches = vec![played_match()];
        let lata = player_career("Lata", &matches).unwrap();
        // Lata scored 2 and was never out: average equals runs.
        assert_eq!(lata.batting.outs, 0);
        assert!((lata.batting.average() - 2.0).abs() < f64::EPSILON);

        let bina = player_career("Bina", &matches).unwrap();
        // Bina was the one dismissed in innings 1.
        assert_eq!(bina.batting.outs, 1);
        assert!((bina.batting.average() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bowling_line_and_best_figures() {
        let matches = vec![played_match()];
        let zoya = player_career("Zoya", &matches).unwrap();
        assert_eq!(zoya.bowling.wickets, 1);
        assert_eq!(zoya.bowling.runs, 5);
        assert_eq!(zoya.bowling.overs, 1);
        assert_eq!(zoya.bowling.best_figures(), "1/5");
        assert!((zoya.bowling.economy() - 5.0).abs() < f64::EPSILON);

        // Asha bowled the chase over for 2 runs, no wicket.
        let asha = player_career("Asha", &matches).unwrap();
        assert_eq!(asha.bowling.best_figures(), "0/2");
        assert_eq!(asha.bowling.average(), None);
    }

    #[test]
    fn strike_rate_per_hundred_balls() {
        let matches = vec![played_match()];
        let asha = player_career("Asha", &matches).unwrap();
        // 5 runs off 2 balls faced.
        assert_eq!(asha.batting.balls, 2);
        assert!((asha.batting.strike_rate() - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn careers_span_multiple_matches() {
        let matches = vec![played_match(), played_match()];
        let asha = player_career("Asha", &matches).unwrap();
        assert_eq!(asha.total_matches, 2);
        assert_eq!(asha.batting.matches, 2);
        assert_eq!(asha.batting.innings, 2);
        assert_eq!(asha.batting.runs, 10);
        // High score is a single-innings figure, not a sum.
        assert_eq!(asha.batting.high_score, 5);
    }

    #[test]
    fn unknown_player_has_no_career() {
        let matches = vec![played_match()];
        assert_eq!(player_career("Nobody", &matches), None);
    }
}
