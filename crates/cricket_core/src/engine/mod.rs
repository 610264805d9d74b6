//! Scoring engine: forward and inverse transitions over match snapshots.
//!
//! Both operations are pure and synchronous. Callers are expected to
//! serialize apply/undo against the same match (single writer per match);
//! read-only observers can hold any snapshot safely.

pub mod apply;
pub mod undo;

pub use apply::apply_ball;
pub use undo::undo_last_ball;

#[cfg(test)]
mod proptests;
