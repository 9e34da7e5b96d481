//! OpenAPI document loader
//!
//! Reads OpenAPI 3.0 documents from JSON or YAML sources and hands a typed,
//! validated document to the translator.

use super::types::OpenApiDocument;
use super::validator;
use oas2proto_common::{Result, TranslateError};
use std::fs;
use std::path::Path;

/// OpenAPI document parser
///
/// Accepts any OpenAPI 3.0 compliant document, serialized as JSON or YAML.
/// External `$ref` targets are accepted but not fetched; the translator
/// resolves references by their terminal name only.
pub struct OpenApiParser {
    /// Loaded document
    document: OpenApiDocument,
}

impl OpenApiParser {
    /// Load an OpenAPI document from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = OpenApiParser::from_file("petstore.yaml")?;
    /// let doc = parser.validated()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TranslateError::Read(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_source(&content)
    }

    /// Parse an OpenAPI document from a JSON or YAML string
    ///
    /// JSON is tried first; on failure the source is re-read as YAML. A
    /// document that parses under neither syntax reports the JSON error,
    /// which is the more common interchange format.
    pub fn from_source(source: &str) -> Result<Self> {
        let document = match serde_json::from_str::<OpenApiDocument>(source) {
            Ok(document) => document,
            Err(json_err) => serde_yaml::from_str::<OpenApiDocument>(source)
                .map_err(|_| TranslateError::Parse(json_err.to_string()))?,
        };

        Ok(Self { document })
    }

    /// Validate the document and hand it over for translation
    pub fn validated(self) -> Result<OpenApiDocument> {
        validator::validate(&self.document)?;
        Ok(self.document)
    }

    /// Get a reference to the underlying document without validation
    pub fn document(&self) -> &OpenApiDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_json() {
        let source = r#"{
            "openapi": "3.0.0",
            "info": { "title": "Test API", "version": "1.0.0" },
            "paths": {}
        }"#;

        let parser = OpenApiParser::from_source(source).unwrap();
        assert_eq!(parser.document().openapi, "3.0.0");
        assert_eq!(parser.document().info.title, "Test API");
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let source = "openapi: 3.0.3\ninfo:\n  title: Test API\n  version: 1.0.0\npaths: {}\n";

        let parser = OpenApiParser::from_source(source).unwrap();
        assert_eq!(parser.document().openapi, "3.0.3");
    }

    #[test]
    fn test_parse_failure_is_a_parse_error() {
        let result = OpenApiParser::from_source("{ not valid in any syntax");
        match result {
            Err(e) => assert_eq!(e.exit_code(), 3),
            Ok(_) => panic!("expected a parse error"),
        }
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = OpenApiParser::from_file("/nonexistent/api.yaml");
        match result {
            Err(e) => assert_eq!(e.exit_code(), 2),
            Ok(_) => panic!("expected a read error"),
        }
    }
}
