use std::fmt;

/// Error produced when decoding encounters a symbol outside the active
/// alphabet or digit set.
///
/// Carries the offending symbol, its character position in the original
/// input, the input itself (truncated for display), and the set of valid
/// symbols for the hint line.
#[derive(Debug, PartialEq, Eq)]
pub struct DecodeError {
    symbol: char,
    position: usize,
    input: String,
    valid_chars: String,
}

impl DecodeError {
    /// Create an invalid-symbol error with display context.
    pub fn invalid_symbol(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            let head: String = input.chars().take(60).collect();
            format!("{}...", head)
        } else {
            input.to_string()
        };

        DecodeError {
            symbol: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// The symbol that failed to decode.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Character position of the offending symbol in the original input.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m invalid symbol '{}' at position {}",
                self.symbol, self.position
            )?;
        } else {
            writeln!(
                f,
                "error: invalid symbol '{}' at position {}",
                self.symbol, self.position
            )?;
        }
        writeln!(f)?;

        // Caret points at the offending position, capped to the truncated
        // display width.
        let caret_col = self.position.min(self.input.chars().count());
        writeln!(f, "  {}", self.input)?;
        write!(f, "  {}", " ".repeat(caret_col))?;
        if use_color {
            writeln!(f, "\x1b[1;31m^\x1b[0m")?;
        } else {
            writeln!(f, "^")?;
        }
        writeln!(f)?;

        let hint_chars = if self.valid_chars.chars().count() > 80 {
            let head: String = self.valid_chars.chars().take(80).collect();
            format!("{}...", head)
        } else {
            self.valid_chars.clone()
        };

        if use_color {
            write!(f, "\x1b[1;36mhint:\x1b[0m valid symbols: {}", hint_chars)?;
        } else {
            write!(f, "hint: valid symbols: {}", hint_chars)?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used.
pub(crate) fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
