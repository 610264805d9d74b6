pub mod ball;
pub mod innings;
pub mod match_record;

pub use ball::{BallEvent, BallInput, MAX_BAT_RUNS};
pub use innings::{BattingFigures, BowlingFigures, Extras, Innings};
pub use match_record::{
    Match, MatchResult, MatchSetup, MatchStatus, MAX_PLAYERS_PER_TEAM, MIN_PLAYERS_PER_TEAM,
};
