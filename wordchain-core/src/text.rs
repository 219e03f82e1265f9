/// Splits raw text into the word tokens the model consumes.
///
/// Tokens are whitespace-separated runs; punctuation stays attached to
/// its word and case is preserved, so "Oyster" and "oyster?" are
/// distinct contexts. This also guarantees tokens contain no spaces,
/// which the transition-table keys rely on.
pub fn tokenize(text: &str) -> Vec<&str> {
	text.split_whitespace().collect()
}

/// Joins generated tokens back into text with single spaces.
pub fn assemble<S: AsRef<str>>(tokens: &[S]) -> String {
	tokens
		.iter()
		.map(|t| t.as_ref())
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokenize_splits_on_any_whitespace() {
		assert_eq!(
			tokenize("What noise\tannoys\n a noisy oyster?"),
			vec!["What", "noise", "annoys", "a", "noisy", "oyster?"]
		);
	}

	#[test]
	fn tokenize_of_blank_text_is_empty() {
		assert!(tokenize("   \n\t ").is_empty());
	}

	#[test]
	fn assemble_inverts_tokenize_for_single_spaced_text() {
		let text = "A noisy noise annoys a noisy oyster.";
		assert_eq!(assemble(&tokenize(text)), text);
	}
}
