//! Bidirectional word-level Markov chain library.
//!
//! This crate builds forwards and backwards Markov chains over a token
//! sequence and generates new sequences by random walk, including:
//! - Fixed-width sliding-prefix transition tables (`Chain`)
//! - Stateful generation cursors with seeding, forcing, and inspection (`Generation`)
//! - Boundary helpers for tokenizing input text and assembling output
//!
//! Only the high-level API is exposed publicly. The sliding-prefix
//! window is kept internal to ensure consistency and prevent misuse.

/// Core chain model and generation logic.
///
/// This module exposes the chain and its generation cursor while keeping
/// the internal prefix representation private.
pub mod model;

/// Text boundary helpers (tokenizing, output assembly).
///
/// Tokenization policy is deliberately minimal; callers with other needs
/// can feed their own token sequences to the model directly.
pub mod text;
