//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod config;
mod feedback;

pub use code::{Code, CodeError};
pub use config::{
    ConfigError, DEFAULT_COLORS, DEFAULT_PEGS, GameConfig, MAX_CODE_SPACE, MAX_COLORS, MAX_PEGS,
};
pub use feedback::Feedback;
