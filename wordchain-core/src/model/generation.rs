use std::collections::HashMap;

use rand::seq::IndexedRandom;

use super::prefix::Prefix;

/// Stateful cursor over one of a chain's transition tables.
///
/// A `Generation` borrows a table read-only and owns a private sliding
/// window; any number of cursors can walk the same chain at once, each
/// with its own position. Advancement is the `Iterator` implementation:
/// each step looks up the current context, picks one recorded successor
/// uniformly at random (duplicates weight the pick by observed
/// frequency), slides the window, and yields the token. `None` means the
/// context has no recorded continuation; the window is left in place, so
/// the cursor stays dry until it is forced elsewhere with `next_with`.
///
/// # Invariants
/// - The referenced table is never written through a cursor
/// - Only the cursor's own advancement mutates its window
#[derive(Clone, Debug)]
pub struct Generation<'a> {
	/// Borrowed from the chain, either forwards or backwards.
	transitions: &'a HashMap<String, Vec<String>>,

	/// The cursor's private context window.
	prefix: Prefix,
}

impl<'a> Generation<'a> {
	pub(crate) fn new(transitions: &'a HashMap<String, Vec<String>>, prefix: Prefix) -> Self {
		Self { transitions, prefix }
	}

	/// Forces the cursor forward by `token`, recorded or not.
	///
	/// Shifts the window unconditionally, without consulting the table.
	/// Forcing an unobserved token can land the cursor on a context with
	/// no continuations, after which iteration yields `None` until the
	/// cursor is forced again.
	pub fn next_with(&mut self, token: &str) {
		self.prefix.shift(token);
	}

	/// Returns a copy of the recorded continuations for the current context.
	///
	/// Duplicates and insertion order are preserved; an unknown context
	/// yields an empty vector. The copy is the caller's to mutate, the
	/// table is never exposed.
	pub fn options(&self) -> Vec<String> {
		self.transitions
			.get(&self.prefix.key())
			.cloned()
			.unwrap_or_default()
	}
}

impl Iterator for Generation<'_> {
	type Item = String;

	/// Advances the cursor one token, or yields `None` at a dead end.
	fn next(&mut self) -> Option<String> {
		let successors = self.transitions.get(&self.prefix.key())?;
		let next = successors.choose(&mut rand::rng())?.clone();
		self.prefix.shift(&next);
		Some(next)
	}
}
