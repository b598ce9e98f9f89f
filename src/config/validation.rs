// src/config/validation.rs

//! Structured diagnostics collected while parsing a configuration.
//!
//! - [`ValidationMessage`]: one error or warning.
//! - [`ValidationList`]: messages for one concern (a section, the general
//!   options, ...). A parse step succeeded iff its list has no errors.
//! - [`ValidationMap`]: ordered `(label, list)` pairs for the whole file.
//!   Only used for reporting; parsing never reads it back.

use std::fmt;

use serde::Serialize;

use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub kind: Severity,
    pub text: String,
}

impl ValidationMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: Severity::Error,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: Severity::Warning,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == Severity::Error
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Severity::Error => write!(f, "Error: {}", self.text),
            Severity::Warning => write!(f, "Warning: {}", self.text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationList {
    messages: Vec<ValidationMessage>,
}

impl ValidationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ValidationMessage) {
        self.messages.push(message);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ValidationMessage::error(text));
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(ValidationMessage::warning(text));
    }

    /// True iff no message is an error.
    pub fn is_valid(&self) -> bool {
        !self.messages.iter().any(ValidationMessage::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationMessage> {
        self.messages.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages.iter().filter(|m| m.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages.iter().filter(|m| !m.is_error())
    }

    pub fn extend(&mut self, other: ValidationList) {
        self.messages.extend(other.messages);
    }
}

impl From<ValidationMessage> for ValidationList {
    fn from(message: ValidationMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

impl<'a> IntoIterator for &'a ValidationList {
    type Item = &'a ValidationMessage;
    type IntoIter = std::slice::Iter<'a, ValidationMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// Full diagnostic report for one configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationMap {
    entries: Vec<(String, ValidationList)>,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    section: Vec<ReportSection<'a>>,
}

#[derive(Serialize)]
struct ReportSection<'a> {
    label: &'a str,
    messages: &'a ValidationList,
}

impl ValidationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, list: ValidationList) {
        self.entries.push((label.into(), list));
    }

    pub fn entries(&self) -> &[(String, ValidationList)] {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<&ValidationList> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, list)| list)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, list)| list.is_valid())
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, l)| l.errors().count()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.entries.iter().map(|(_, l)| l.warnings().count()).sum()
    }

    /// Render the report as TOML (`[[section]]` tables with their messages).
    pub fn to_toml(&self) -> Result<String> {
        let doc = ReportDocument {
            section: self
                .entries
                .iter()
                .filter(|(_, list)| !list.is_empty())
                .map(|(label, messages)| ReportSection { label, messages })
                .collect(),
        };
        Ok(toml::to_string(&doc)?)
    }
}

impl fmt::Display for ValidationMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, list) in self.entries.iter().filter(|(_, l)| !l.is_empty()) {
            writeln!(f, "{label}:")?;
            for message in list {
                writeln!(f, "  {message}")?;
            }
        }
        Ok(())
    }
}
