//! Top-level module for the Markov chain system.
//!
//! This module provides a bidirectional word-level Markov chain, including:
//! - Transition tables keyed on fixed-width prefixes (`Chain`)
//! - Internal sliding-window prefix management (`Prefix`)
//! - A stateful generation cursor (`Generation`)

/// Bidirectional Markov chain over token sequences.
///
/// Owns the forwards and backwards transition tables, accumulates
/// observations via repeated builds, and hands out generation cursors.
pub mod chain;

/// Stateful cursor over one of a chain's transition tables.
///
/// Supports random-walk advancement, forced advancement, and
/// inspection of the recorded continuations for the current context.
pub mod generation;

/// Internal fixed-width sliding window of the last N tokens.
///
/// Serves as the transition-table key and is mutated in place by a
/// shift operation. This module is not exposed publicly.
mod prefix;
