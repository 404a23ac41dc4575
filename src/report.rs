use std::{fmt, time::Duration};

/// Text output of one solve: answer lines first, then whatever detail the
/// day wants to show about how it got there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    answers: Vec<(String, String)>,
    details: Vec<String>,
    elapsed: Option<Duration>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&mut self, label: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.answers.push((label.into(), value.to_string()));
        self
    }

    pub fn detail(&mut self, line: impl Into<String>) -> &mut Self {
        self.details.push(line.into());
        self
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }

    /// Removes the timing so the report prints without it
    pub fn take_elapsed(&mut self) -> Option<Duration> {
        self.elapsed.take()
    }

    pub fn answers(&self) -> &[(String, String)] {
        &self.answers
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Value of the answer with the given label, if the day produced one
    pub fn get(&self, label: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in &self.answers {
            writeln!(f, "{label}: {value}")?;
        }
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "Compute time: {elapsed:?}")?;
        }
        if !self.details.is_empty() {
            writeln!(f)?;
            for line in &self.details {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
