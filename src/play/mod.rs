//! Playing complete games.
//!
//! [`Match`] alternates two [`MovePolicy`](crate::policy::MovePolicy)
//! implementations on a fresh board and records every move. Timing, input
//! and display are left to the host.

pub mod config;
pub mod runner;

pub use config::MatchConfig;
pub use runner::{Match, MatchEnd, MatchSummary};
