//! Key-press driven calculator engine.
//!
//! The [`calculator`] module turns discrete key presses into a normalized
//! expression buffer and evaluates it. [`config`] holds the small set of
//! user-facing options the command-line driver reads.

pub mod calculator;
pub mod config;

pub use calculator::{Calculator, Press, Token};
pub use config::{Config, DisplayStyle};
