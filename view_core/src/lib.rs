//! Decides whether one world snapshot is a legitimate view of another.
//!
//! A player's map is built from what that player has seen, so it may omit
//! or blur facts the master map holds but must never contradict it or
//! invent anything. [`check_map`] answers that question for whole maps and
//! the [`Subset`] impls answer it for every kind of fixture, writing one
//! line per discrepancy to a caller-supplied [`Report`].

pub mod config;
mod fixture;
mod fortress;
mod leaf;
mod map;
mod members;
mod players;
mod population;
mod quantity;
mod relation;
pub mod report;
pub mod sample;
mod settlement;
mod stock;
mod unit;
mod worker;

pub use config::{
    load_subset_config, load_subset_config_from_env, SubsetConfig, SubsetConfigError,
};
pub use fixture::same_ignoring_id;
pub use map::{check_map, stream_check};
pub use members::Member;
pub use relation::Subset;
pub use report::{ChannelReport, Counted, DiagnosticBuffer, Report, Scoped, Silent};
pub use settlement::{owner_matches, settlement_is_subset, UNKNOWN_NAME};
