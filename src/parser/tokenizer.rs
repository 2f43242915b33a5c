//! Splitting raw input lines into tokens.

/// A line as typed, plus its space-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    line: String,
    tokens: Vec<String>,
}

impl RawInput {
    /// Tokenize `line` on single spaces.
    ///
    /// Trailing empty tokens are dropped, leading and interior ones are kept,
    /// and there is always at least one token. No quoting or escaping.
    ///
    /// ```
    /// use dolla::parser::RawInput;
    ///
    /// let input = RawInput::new("done 2 ");
    /// assert_eq!(input.verb(), "done");
    /// assert_eq!(input.arg(1), Some("2"));
    /// assert_eq!(input.token_count(), 2);
    ///
    /// assert_eq!(RawInput::new("").verb(), "");
    /// ```
    #[must_use]
    pub fn new(line: &str) -> Self {
        let mut tokens: Vec<String> = line.split(' ').map(String::from).collect();
        while tokens.len() > 1 && tokens.last().is_some_and(String::is_empty) {
            tokens.pop();
        }
        tracing::trace!(line, count = tokens.len(), "tokenized input");

        Self {
            line: line.to_string(),
            tokens,
        }
    }

    /// The untouched input line.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The first token, which selects the command.
    #[must_use]
    pub fn verb(&self) -> &str {
        self.tokens.first().map_or("", String::as_str)
    }

    /// Token at `index`, if present. Index 0 is the verb.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// All tokens, verb first.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens, verb included.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Text after the verb and one separating space.
    ///
    /// `None` when the line is exactly the verb; `Some("")` when only the
    /// separating space follows.
    #[must_use]
    pub fn rest_after_verb(&self) -> Option<&str> {
        self.line.get(self.verb().len() + 1..)
    }
}
