use std::io::{self, BufRead, Write};

// ---------------------------------------------------------------------------
// Prompter – validated console input
// ---------------------------------------------------------------------------

/// Line-oriented prompt driver over arbitrary input/output streams.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// The underlying output stream, for printing between prompts.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line, trimmed. A closed stream surfaces as `UnexpectedEof`.
    fn read_trimmed(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask a question; any answer starting with `y`/`Y` is affirmative.
    pub fn affirm(&mut self, question: &str) -> io::Result<bool> {
        writeln!(self.output, "{question}")?;
        let answer = self.read_trimmed()?;
        Ok(answer.to_lowercase().starts_with('y'))
    }

    /// Ask a free-form question and return the trimmed answer.
    pub fn line(&mut self, question: &str) -> io::Result<String> {
        writeln!(self.output, "{question}")?;
        self.read_trimmed()
    }

    /// Prompt until the (trimmed, lowercased) answer is a member of
    /// `allowed` and the user confirms it. The loop has a single exit:
    /// validated and confirmed.
    pub fn choose(&mut self, label: &str, allowed: &[&str]) -> io::Result<String> {
        loop {
            writeln!(self.output, "Enter {label}.")?;
            writeln!(self.output, "Allowed values are:")?;
            for value in allowed {
                writeln!(self.output, "\t{value}")?;
            }

            let value = self.read_trimmed()?.to_lowercase();
            if !allowed.contains(&value.as_str()) {
                writeln!(self.output, "Invalid input. Try again.")?;
                continue;
            }

            writeln!(self.output, "You selected: {label} = {value}")?;
            let confirmed = self.affirm(
                "Keep this choice? Press y to confirm, anything else to enter a new value.",
            )?;
            if confirmed {
                return Ok(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn choose_accepts_a_confirmed_member() {
        let mut p = prompter("chicago\ny\n");
        let value = p.choose("city", &["chicago", "washington"]).unwrap();
        assert_eq!(value, "chicago");
    }

    #[test]
    fn choose_normalizes_case_and_whitespace() {
        let mut p = prompter("  ChIcAgO \nY\n");
        let value = p.choose("city", &["chicago", "washington"]).unwrap();
        assert_eq!(value, "chicago");
    }

    #[test]
    fn choose_reprompts_on_invalid_input() {
        let mut p = prompter("boston\nmiami\nwashington\nyes\n");
        let value = p.choose("city", &["chicago", "washington"]).unwrap();
        assert_eq!(value, "washington");

        let transcript = String::from_utf8(p.output).unwrap();
        assert_eq!(transcript.matches("Invalid input").count(), 2);
    }

    #[test]
    fn choose_reprompts_when_not_confirmed() {
        // First selection is valid but declined; second is confirmed.
        let mut p = prompter("chicago\nn\nwashington\ny\n");
        let value = p.choose("city", &["chicago", "washington"]).unwrap();
        assert_eq!(value, "washington");
    }

    #[test]
    fn choose_never_returns_a_value_outside_the_allowed_set() {
        let mut p = prompter("all\nno\njune\nmay\nnope\nmay\ny\n");
        let value = p.choose("month", &["may", "june", "all"]).unwrap();
        assert!(["may", "june", "all"].contains(&value.as_str()));
        assert_eq!(value, "may");
    }

    #[test]
    fn affirm_accepts_any_y_prefix() {
        assert!(prompter("y\n").affirm("?").unwrap());
        assert!(prompter("Yes\n").affirm("?").unwrap());
        assert!(!prompter("no\n").affirm("?").unwrap());
        assert!(!prompter("\n").affirm("?").unwrap());
    }

    #[test]
    fn closed_input_is_an_eof_error() {
        let err = prompter("").affirm("?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
