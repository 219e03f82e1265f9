/// Fixed-width sliding window of the last N tokens seen.
///
/// A `Prefix` is the context half of a Markov transition: its serialized
/// form is the key under which the next token is recorded or looked up.
///
/// # Responsibilities
/// - Hold exactly N tokens at all times (unseen positions are empty strings)
/// - Produce the transition-table key for the current window
/// - Slide the window forward one token at a time
///
/// # Invariants
/// - The window length is fixed at construction and never changes
/// - Tokens are stored oldest-first; shifting drops the oldest
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Prefix {
	tokens: Vec<String>,
}

impl Prefix {
	/// Creates a window of `length` empty-string placeholders.
	///
	/// This is the initial context: the key it produces maps to the
	/// tokens that started each built sequence.
	pub(crate) fn empty(length: usize) -> Self {
		Self { tokens: vec![String::new(); length] }
	}

	/// Creates a window of `length` tokens derived from a caller seed.
	///
	/// - If the seed is longer than `length`, only the last `length`
	///   elements are kept (dropped from the front).
	/// - If the seed is shorter, the front is padded with empty strings
	///   so the seed sits at the end of the window.
	pub(crate) fn from_seed<S: AsRef<str>>(seed: &[S], length: usize) -> Self {
		let mut tokens: Vec<String> = vec![String::new(); length.saturating_sub(seed.len())];
		let skip = seed.len().saturating_sub(length);
		tokens.extend(seed[skip..].iter().map(|t| t.as_ref().to_owned()));
		Self { tokens }
	}

	/// Returns the window as a transition-table key.
	///
	/// Tokens are joined with a single space. Tokens are assumed not to
	/// contain spaces themselves; the tokenizer at the boundary upholds
	/// this, the window does not re-check it.
	pub(crate) fn key(&self) -> String {
		self.tokens.join(" ")
	}

	/// Slides the window: drops the oldest token and appends `token`.
	///
	/// For a length-1 window this degenerates to replacing the single token.
	pub(crate) fn shift(&mut self, token: &str) {
		self.tokens.remove(0);
		self.tokens.push(token.to_owned());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn key_joins_tokens_with_spaces() {
		let prefix = Prefix::from_seed(&["what", "noise", "annoys"], 3);
		assert_eq!(prefix.key(), "what noise annoys");
	}

	#[test]
	fn empty_window_key_matches_padded_seed_key() {
		assert_eq!(Prefix::empty(1).key(), "");
		assert_eq!(Prefix::empty(3).key(), "  ");
		let empty_seed: &[&str] = &[];
		assert_eq!(Prefix::from_seed(empty_seed, 3), Prefix::empty(3));
	}

	#[test]
	fn shift_replaces_single_token_window() {
		let mut prefix = Prefix::from_seed(&["what"], 1);
		prefix.shift("noise");
		assert_eq!(prefix, Prefix::from_seed(&["noise"], 1));
	}

	#[test]
	fn shift_drops_oldest_and_appends() {
		let mut prefix = Prefix::from_seed(&["what", "noise"], 2);
		prefix.shift("annoys");
		assert_eq!(prefix, Prefix::from_seed(&["noise", "annoys"], 2));
	}

	#[test]
	fn from_seed_keeps_last_n_of_long_seed() {
		let prefix = Prefix::from_seed(&["a", "noisy"], 1);
		assert_eq!(prefix, Prefix::from_seed(&["noisy"], 1));
	}

	#[test]
	fn from_seed_pads_short_seed_at_front() {
		let prefix = Prefix::from_seed(&["oyster."], 3);
		assert_eq!(prefix.key(), "  oyster.");
	}
}
