//! libxslt-backed transformer

use std::path::{Path, PathBuf};

use libxml::parser::{Parser, ParserOptions};
use libxml::tree::{Document, SaveOptions};
use libxslt::stylesheet::Stylesheet;
use log::{debug, trace};

use crate::errors::{
    Result, invalid_filename_error, parse_error, stylesheet_error, transform_error,
};
use crate::path_gen::TransformJob;

use super::DocumentTransformer;
use super::params::TransformParameters;

/// A stylesheet compiled once and applied to every document of the batch
pub struct XsltTransformer {
    stylesheet: Stylesheet,
    stylesheet_path: PathBuf,
    parser: Parser,
    indent: bool,
}

impl XsltTransformer {
    /// Loads and compiles the stylesheet at `path`
    ///
    /// # Errors
    /// Returns a stylesheet error if the file is missing, unreadable, or not a
    /// valid XSLT document. Callers treat this as fatal for the whole batch.
    pub fn load(path: &Path, indent: bool) -> Result<Self> {
        if !path.is_file() {
            return Err(stylesheet_error(path.to_path_buf(), "file not found"));
        }
        let path_str = path
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;

        let parser = Parser::default();
        // The stylesheet compiler parses in recovery mode, so check well-formedness first
        parser
            .parse_file_with_options(path_str, well_formedness_options())
            .map_err(|e| {
                stylesheet_error(path.to_path_buf(), &format!("not well-formed XML ({e:?})"))
            })?;

        let stylesheet = libxslt::parser::parse_file(path_str)
            .map_err(|e| stylesheet_error(path.to_path_buf(), &format!("{e:?}")))?;
        debug!("Compiled stylesheet {}", path.display());

        Ok(XsltTransformer {
            stylesheet,
            stylesheet_path: path.to_path_buf(),
            parser,
            indent,
        })
    }

    /// Path the stylesheet was loaded from
    pub fn stylesheet_path(&self) -> &Path {
        &self.stylesheet_path
    }

    fn parse_source(&self, path: &Path) -> Result<Document> {
        let path_str = path
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;

        self.parser
            .parse_file_with_options(path_str, strict_options())
            .map_err(|e| parse_error(path.to_path_buf(), &format!("not well-formed XML ({e:?})")))
    }

    fn serialize(&self, document: &Document) -> String {
        let options = SaveOptions {
            format: self.indent,
            no_declaration: true,
            ..SaveOptions::default()
        };
        document.to_string_with_options(options)
    }
}

/// Parser options that reject malformed input instead of recovering from it
fn strict_options<'a>() -> ParserOptions<'a> {
    ParserOptions {
        recover: false,
        ..ParserOptions::default()
    }
}

/// Strict options for the stylesheet check, without libxml2 diagnostics
///
/// Attribute value templates such as `xml:id="{$filename}"` are not valid IDs
/// until the stylesheet runs, and libxml2 would report each one.
fn well_formedness_options<'a>() -> ParserOptions<'a> {
    ParserOptions {
        no_error: true,
        no_warning: true,
        ..strict_options()
    }
}

/// libxslt prints the stylesheet's own message to stderr and returns a fixed
/// text, so the reported detail names the usual causes
fn transform_failure_detail(engine_message: &str) -> String {
    format!(
        "stylesheet terminated or raised a runtime error ({engine_message}); see the engine output above"
    )
}

impl DocumentTransformer for XsltTransformer {
    fn transform(&mut self, job: &TransformJob) -> Result<String> {
        let source = &job.source.path;
        let params = TransformParameters::for_document(&job.source)?;

        let document = self.parse_source(source)?;
        trace!("Parsed {}", source.display());

        let result = self
            .stylesheet
            .transform(document, params.as_engine_params())
            .map_err(|e| {
                transform_error(source.clone(), &transform_failure_detail(&e.to_string()))
            })?;

        Ok(self.serialize(&result))
    }
}
