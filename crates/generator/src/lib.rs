//! OpenAPI to proto3 translation for oas2proto
//!
//! This crate is the translation core: it takes a validated
//! [`OpenApiDocument`] and produces proto3 text containing one enum or
//! message per named component schema and a single `ApiService` with one RPC
//! per path/method operation.
//!
//! The translation itself is infallible. Domain-level inconsistencies in the
//! source (dangling references, schemaless bodies, colliding normalized
//! enum constants) degrade into best-effort output rather than errors; every
//! I/O or validation failure is caught before this crate runs.
//!
//! ## Usage
//! ```rust,ignore
//! use oas2proto_generator::ProtoGenerator;
//! use oas2proto_parser::OpenApiParser;
//!
//! let document = OpenApiParser::from_file("petstore.yaml")?.validated()?;
//! let proto_text = ProtoGenerator::new(document).generate();
//! ```

pub mod naming;
pub mod operations;
pub mod proto;
pub mod schemas;
pub mod type_map;

use oas2proto_parser::OpenApiDocument;
use proto::ProtoFile;

/// Proto package name emitted in the file header
pub const PACKAGE_NAME: &str = "generated";

/// Proto file generator
///
/// Builds declaration records from the document in a single pass and renders
/// them once at the end: header, schema declarations, service block.
pub struct ProtoGenerator {
    document: OpenApiDocument,
}

impl ProtoGenerator {
    /// Create a generator for a validated document
    pub fn new(document: OpenApiDocument) -> Self {
        Self { document }
    }

    /// Build the structured proto file records
    pub fn build(&self) -> ProtoFile {
        ProtoFile {
            package: PACKAGE_NAME.to_string(),
            declarations: schemas::translate_schemas(&self.document),
            service: operations::translate_operations(&self.document),
        }
    }

    /// Translate the document into proto3 text
    pub fn generate(&self) -> String {
        self.build().render()
    }
}

/// Translate a validated document into proto3 text (convenience function)
pub fn generate_proto(document: &OpenApiDocument) -> String {
    ProtoFile {
        package: PACKAGE_NAME.to_string(),
        declarations: schemas::translate_schemas(document),
        service: operations::translate_operations(document),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas2proto_parser::OpenApiParser;

    #[test]
    fn test_empty_document_renders_header_and_empty_service() {
        let document = OpenApiParser::from_source(
            r#"{"openapi": "3.0.0", "info": {"title": "t", "version": "1"}, "paths": {}}"#,
        )
        .unwrap()
        .validated()
        .unwrap();

        let text = ProtoGenerator::new(document).generate();
        assert_eq!(
            text,
            "syntax = \"proto3\";\n\npackage generated;\nimport \"google/api/annotations.proto\";\nimport \"google/protobuf/struct.proto\";\nimport \"google/protobuf/empty.proto\";\n\nservice ApiService {\n}\n"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let document = OpenApiParser::from_source(
            r##"{"openapi": "3.0.0", "info": {"title": "t", "version": "1"},
                 "paths": {"/users": {"get": {"responses": {"200": {"description": "OK"}}}}},
                 "components": {"schemas": {
                     "User": {"type": "object", "properties": {"id": {"type": "integer"}}}
                 }}}"##,
        )
        .unwrap()
        .validated()
        .unwrap();

        let generator = ProtoGenerator::new(document);
        assert_eq!(generator.generate(), generator.generate());
    }
}
