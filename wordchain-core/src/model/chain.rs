use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::generation::Generation;
use super::prefix::Prefix;

/// Bidirectional Markov chain over word tokens.
///
/// The `Chain` stores two independent transition tables: one built by
/// scanning the input tokens left-to-right (`forwards`) and one built by
/// scanning right-to-left (`backwards`). Each table maps a serialized
/// N-token prefix to every token observed to immediately follow that
/// context, in insertion order and with duplicates retained, so a
/// uniform random pick is already frequency-weighted.
///
/// # Responsibilities
/// - Accumulate transitions from one or more token sequences
/// - Hand out `Generation` cursors over either table
///
/// # Invariants
/// - Both tables always exist, even when empty
/// - `prefix_length` is >= 1 and never changes after construction
/// - Tables are mutated only by `build`; generation never writes
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Chain {
	/// Transitions observed scanning tokens in their original order.
	forwards: HashMap<String, Vec<String>>,

	/// Transitions observed scanning tokens in reverse order.
	backwards: HashMap<String, Vec<String>>,

	/// Number of tokens in every transition key.
	prefix_length: usize,
}

impl Chain {
	/// Creates a new chain with prefixes of `prefix_length` tokens.
	///
	/// # Errors
	/// Returns an error if `prefix_length < 1`.
	pub fn new(prefix_length: usize) -> Result<Self, String> {
		if prefix_length < 1 {
			return Err("prefix length must be >= 1".to_owned());
		}
		Ok(Self {
			forwards: HashMap::new(),
			backwards: HashMap::new(),
			prefix_length,
		})
	}

	/// Returns the fixed prefix length of both tables.
	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	/// Returns the number of distinct contexts in the forwards table.
	pub fn forward_contexts(&self) -> usize {
		self.forwards.len()
	}

	/// Returns the number of distinct contexts in the backwards table.
	pub fn backward_contexts(&self) -> usize {
		self.backwards.len()
	}

	/// Records one token sequence into both transition tables.
	///
	/// Two sliding windows start out empty, one walking `tokens`
	/// left-to-right, one right-to-left. At each position the current
	/// window key maps to the token about to be consumed, then the
	/// window shifts by that token.
	///
	/// # Notes
	/// - Callable repeatedly; every call appends to the existing tables.
	/// - The empty initial context therefore collects the first token of
	///   every built sequence (and the last token, on the backwards side).
	/// - Must not run concurrently with cursors reading the same chain;
	///   build fully before generating, or serialize access externally.
	pub fn build<S: AsRef<str>>(&mut self, tokens: &[S]) {
		let mut forwards_prefix = Prefix::empty(self.prefix_length);
		let mut backwards_prefix = Prefix::empty(self.prefix_length);

		for i in 0..tokens.len() {
			let forward_token = tokens[i].as_ref();
			self.forwards
				.entry(forwards_prefix.key())
				.or_default()
				.push(forward_token.to_owned());
			forwards_prefix.shift(forward_token);

			let backward_token = tokens[tokens.len() - i - 1].as_ref();
			self.backwards
				.entry(backwards_prefix.key())
				.or_default()
				.push(backward_token.to_owned());
			backwards_prefix.shift(backward_token);
		}
	}

	/// Returns a forwards cursor starting from the empty context.
	///
	/// Its first step picks among the first tokens of the built sequences.
	pub fn generate_forward(&self) -> Generation<'_> {
		Generation::new(&self.forwards, Prefix::empty(self.prefix_length))
	}

	/// Returns a forwards cursor seeded with a starting context.
	///
	/// If the seed is longer than the chain's prefix length, elements are
	/// dropped from its front; if shorter, the front is padded with
	/// empty-string placeholders.
	pub fn generate_forward_from_prefix<S: AsRef<str>>(&self, seed: &[S]) -> Generation<'_> {
		Generation::new(&self.forwards, Prefix::from_seed(seed, self.prefix_length))
	}

	/// Returns a backwards cursor starting from the empty context.
	///
	/// Its first step picks among the last tokens of the built sequences.
	pub fn generate_backward(&self) -> Generation<'_> {
		Generation::new(&self.backwards, Prefix::empty(self.prefix_length))
	}

	/// Returns a backwards cursor seeded with a starting context.
	///
	/// The seed is truncated or padded exactly as for the forwards case
	/// and is never reordered: supply it in the orientation the backwards
	/// table records, i.e. the order tokens are encountered when the
	/// input is scanned in reverse.
	pub fn generate_backward_from_prefix<S: AsRef<str>>(&self, seed: &[S]) -> Generation<'_> {
		Generation::new(&self.backwards, Prefix::from_seed(seed, self.prefix_length))
	}
}

#[cfg(test)]
mod tests {
	use crate::text::tokenize;

	use super::*;

	const SENTENCE_1: &str = "What noise annoys a noisy oyster?";
	const SENTENCE_2: &str = "A noisy noise annoys a noisy oyster.";

	fn oyster_chain() -> Chain {
		let mut chain = Chain::new(1).unwrap();
		chain.build(&tokenize(SENTENCE_1));
		chain.build(&tokenize(SENTENCE_2));
		chain
	}

	#[test]
	fn new_rejects_zero_prefix_length() {
		assert!(Chain::new(0).is_err());
	}

	#[test]
	fn new_chain_has_both_tables() {
		let chain = Chain::new(1).unwrap();
		assert_eq!(chain.forward_contexts(), 0);
		assert_eq!(chain.backward_contexts(), 0);
		assert_eq!(chain.prefix_length(), 1);
	}

	#[test]
	fn build_accumulates_one_context_per_distinct_word() {
		// 6 distinct words across both sentences, plus the empty
		// initial context, gives 7 keys in each direction.
		let chain = oyster_chain();
		assert_eq!(chain.forward_contexts(), 7);
		assert_eq!(chain.backward_contexts(), 7);
	}

	#[test]
	fn build_retains_duplicate_successors_in_order() {
		let chain = oyster_chain();
		assert_eq!(
			chain.forwards.get("annoys"),
			Some(&vec!["a".to_owned(), "a".to_owned()])
		);
		assert_eq!(
			chain.forwards.get(""),
			Some(&vec!["What".to_owned(), "A".to_owned()])
		);
	}

	#[test]
	fn every_forward_transition_has_a_backward_counterpart() {
		let chain = oyster_chain();
		for (context, successors) in &chain.forwards {
			if context.is_empty() {
				continue;
			}
			for successor in successors {
				let reversed = chain
					.backwards
					.get(successor)
					.map(|tokens| tokens.contains(context))
					.unwrap_or(false);
				assert!(
					reversed,
					"no backward transition {successor} -> {context}"
				);
			}
		}
	}

	#[test]
	fn tables_are_independent_structures() {
		let chain = oyster_chain();
		assert_eq!(chain.forwards.get("").unwrap().len(), 2);
		assert_eq!(
			chain.backwards.get(""),
			Some(&vec!["oyster?".to_owned(), "oyster.".to_owned()])
		);
	}

	#[test]
	fn longer_prefixes_key_on_full_window() {
		let mut chain = Chain::new(2).unwrap();
		chain.build(&tokenize(SENTENCE_1));
		assert_eq!(
			chain.forwards.get("noise annoys"),
			Some(&vec!["a".to_owned()])
		);
		assert_eq!(
			chain.forwards.get(" What"),
			Some(&vec!["noise".to_owned()])
		);
	}
}
