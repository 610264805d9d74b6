pub mod json_api;

pub use json_api::{apply_ball_json, create_match_json, undo_last_ball_json, CreateMatchRequest};
