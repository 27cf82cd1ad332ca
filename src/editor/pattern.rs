// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whitespace-tolerant definition matching for a single key.
//!
//! ```text
//! line:   [ \t]* KEY [ \t]* = rest
//!                 ^anchored at line start, \b-guarded
//!
//! is_definition()   does the line assign KEY at all?
//! assigned_value()  rest with surrounding [ \t] trimmed
//! classify()        NotAVariableLine | DifferentValue | MatchingValue
//! ```

use regex::Regex;

use crate::error::InputError;

use super::types::LineClassification;

/// Compiled matcher for definition lines of one key.
#[derive(Debug, Clone)]
pub struct DefinitionPattern {
    regex: Regex,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl DefinitionPattern {
    /// Builds the anchored definition pattern for `key`.
    ///
    /// The key is matched literally (regex-escaped). Word-boundary guards
    /// are added only where the key starts or ends with an identifier
    /// character, so `FOO` never matches inside `FOOBAR` while non-word
    /// keys still match.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::BadPattern`] if the assembled regex fails to
    /// compile.
    pub fn for_key(key: &str) -> std::result::Result<Self, InputError> {
        let mut pattern = String::from(r"^[ \t]*");
        if key.chars().next().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(key));
        if key.chars().next_back().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(r"[ \t]*=(.*)$");

        let regex = Regex::new(&pattern).map_err(|e| InputError::BadPattern {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { regex })
    }

    /// Whether the line assigns the key, regardless of the value.
    #[must_use]
    pub fn is_definition(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The assigned value of a definition line, with surrounding
    /// horizontal whitespace trimmed. `None` if the line is not a
    /// definition of the key.
    #[must_use]
    pub fn assigned_value<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.regex
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|rest| rest.as_str().trim_matches([' ', '\t']))
    }

    /// Classifies a line against the key and an expected value.
    ///
    /// The assigned value must equal `value` exactly after whitespace
    /// trimming; trailing content makes the line a differing definition.
    #[must_use]
    pub fn classify(&self, line: &str, value: &str) -> LineClassification {
        match self.assigned_value(line) {
            None => LineClassification::NotAVariableLine,
            Some(assigned) if assigned == value => {
                LineClassification::DefinesKeyWithMatchingValue
            }
            Some(_) => LineClassification::DefinesKeyWithDifferentValue,
        }
    }
}
