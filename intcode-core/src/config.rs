//! Environment configuration loading from .env files
//!
//! Defaults for the amplifier search and the noun/verb search. Command-line
//! flags override these values.

use once_cell::sync::Lazy;
use std::env;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Parses a comma/whitespace separated list of integers
pub fn parse_list(text: &str) -> Option<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}

/// Phase settings searched by default
/// Default: 0,1,2,3,4
pub fn phases() -> Vec<i64> {
    ensure_loaded();
    env::var("INTCODE_PHASES")
        .ok()
        .and_then(|v| parse_list(&v))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec![0, 1, 2, 3, 4])
}

/// Value forwarded into stage 0
/// Default: 0
pub fn initial_input() -> i64 {
    ensure_loaded();
    env::var("INTCODE_INITIAL_INPUT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Memory[0] value the noun/verb search looks for
/// Default: 19690720
pub fn patch_target() -> i64 {
    ensure_loaded();
    env::var("INTCODE_PATCH_TARGET")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(19_690_720)
}

/// Exclusive upper bound for noun and verb
/// Default: 100
pub fn patch_max() -> i64 {
    ensure_loaded();
    env::var("INTCODE_PATCH_MAX")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(100)
}

/// Cached values
pub static PHASES: Lazy<Vec<i64>> = Lazy::new(phases);
pub static INITIAL_INPUT: Lazy<i64> = Lazy::new(initial_input);
pub static PATCH_TARGET: Lazy<i64> = Lazy::new(patch_target);
pub static PATCH_MAX: Lazy<i64> = Lazy::new(patch_max);

/// Phase settings and forwarded value for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// One phase per stage, in stage order
    pub phases: Vec<i64>,
    /// Value seeded after stage 0's phase
    pub initial: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            phases: PHASES.clone(),
            initial: *INITIAL_INPUT,
        }
    }
}

impl PipelineConfig {
    /// Replaces the phase settings
    pub fn with_phases(mut self, phases: Vec<i64>) -> Self {
        self.phases = phases;
        self
    }

    /// Replaces the forwarded value
    pub fn with_initial(mut self, initial: i64) -> Self {
        self.initial = initial;
        self
    }
}
