//! Stylesheet parameters
//!
//! The engine evaluates every parameter value as an XPath expression, so
//! plain strings have to be turned into XPath string literals before they are
//! handed over.

use crate::constants::{FILENAME_PARAM, FOLDER_PARAM};
use crate::discovery::SourceDocument;
use crate::errors::Result;

/// Ordered name/value pairs passed to the stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformParameters {
    entries: Vec<(String, String)>,
}

impl TransformParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `filename` and `folder` parameters for one source document
    ///
    /// # Errors
    /// Returns an error if the file name or its directory is not valid unicode
    pub fn for_document(document: &SourceDocument) -> Result<Self> {
        let mut params = Self::new();
        params.insert_string(FILENAME_PARAM, document.stem()?);
        params.insert_string(FOLDER_PARAM, document.folder()?);
        Ok(params)
    }

    /// Adds a parameter whose value is the literal string `value`
    ///
    /// A later insert with the same name replaces the earlier value.
    pub fn insert_string(&mut self, name: &str, value: &str) {
        let literal = xpath_string_literal(value);
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = literal,
            None => self.entries.push((name.to_string(), literal)),
        }
    }

    /// Borrowed pairs in the shape the XSLT engine takes
    pub fn as_engine_params(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

/// Quotes `value` as an XPath 1.0 string literal
///
/// XPath 1.0 has no escape sequences, so a value holding both quote kinds is
/// assembled with `concat()`.
pub fn xpath_string_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }

    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{part}'"))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}
