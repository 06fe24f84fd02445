use std::fmt;

use super::error::Error;

pub const PHRASE_LEN: usize = 12;

/// Twelve-word mnemonic, only ever held in memory by the creation flow.
#[derive(Clone, PartialEq, Eq)]
pub struct RecoveryPhrase(Vec<String>);

impl RecoveryPhrase {
    pub fn parse(s: &str) -> Result<Self, Error> {
        let words: Vec<String> = s.split_whitespace().map(str::to_string).collect();
        Self::from_words(words)
    }

    pub fn from_words(words: Vec<String>) -> Result<Self, Error> {
        if words.len() != PHRASE_LEN {
            return Err(Error::InvalidPhrase(format!(
                "expected {} words, got {}",
                PHRASE_LEN,
                words.len()
            )));
        }
        if let Some(i) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(Error::InvalidPhrase(format!("word {} is empty", i + 1)));
        }
        Ok(Self(words))
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn to_phrase(&self) -> String {
        self.0.join(" ")
    }

    /// Compares the user input word by word, trimmed and case-sensitive.
    pub fn check(&self, confirmation: &[String]) -> Result<(), Error> {
        for (i, word) in self.0.iter().enumerate() {
            if confirmation.get(i).map(|w| w.trim()) != Some(word.as_str()) {
                return Err(Error::PhraseMismatch { position: i + 1 });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecoveryPhrase(<redacted>)")
    }
}
