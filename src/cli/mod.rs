//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line interface for analyzing positions,
//! solving the full game, and evaluating the engine against opponents.

pub mod commands;
pub mod output;
