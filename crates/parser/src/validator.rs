//! Structural validation for loaded OpenAPI documents
//!
//! Checks run after parsing and before translation. Reference *existence* is
//! deliberately not checked: a `$ref` to a schema that is never declared
//! stays legal here and degrades into best-effort output downstream.

use super::types::{OpenApiDocument, Schema, SchemaOrRef};
use oas2proto_common::{Result, TranslateError};

/// Validate the structural invariants of a parsed document
pub fn validate(document: &OpenApiDocument) -> Result<()> {
    let mut errors = Vec::new();

    if !document.openapi.starts_with('3') {
        errors.push(format!(
            "unsupported OpenAPI version {:?}, expected 3.x",
            document.openapi
        ));
    }

    if document.info.title.is_empty() {
        errors.push("info.title must not be empty".to_string());
    }
    if document.info.version.is_empty() {
        errors.push("info.version must not be empty".to_string());
    }

    for path in document.paths.keys() {
        if !path.starts_with('/') {
            errors.push(format!("path {:?} must start with '/'", path));
        }
    }

    for (name, schema) in document.schemas() {
        check_schema_refs(name, schema, &mut errors);
    }

    for (path, item) in &document.paths {
        for (method, op) in item.operations() {
            if let Some(body) = &op.request_body {
                for media in body.content.values() {
                    if let Some(schema_ref) = &media.schema {
                        check_ref_syntax(
                            &format!("{} {} requestBody", method.as_str(), path),
                            schema_ref,
                            &mut errors,
                        );
                    }
                }
            }
            for (status, response) in &op.responses {
                for media in response.content.values() {
                    if let Some(schema_ref) = &media.schema {
                        check_ref_syntax(
                            &format!("{} {} response {}", method.as_str(), path, status),
                            schema_ref,
                            &mut errors,
                        );
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TranslateError::Validate(errors.join("; ")))
    }
}

/// Walk a named schema and check every reference it carries
fn check_schema_refs(context: &str, schema: &Schema, errors: &mut Vec<String>) {
    for (property, schema_ref) in &schema.properties {
        check_ref_syntax(&format!("{}.{}", context, property), schema_ref, errors);
        if let Some(inline) = schema_ref.as_schema() {
            check_schema_refs(&format!("{}.{}", context, property), inline, errors);
        }
    }
    if let Some(items) = &schema.items {
        check_ref_syntax(&format!("{}[]", context), items, errors);
        if let Some(inline) = items.as_schema() {
            check_schema_refs(&format!("{}[]", context), inline, errors);
        }
    }
}

/// A reference must be non-empty and either an internal JSON pointer or an
/// external document location. External references are accepted as-is.
fn check_ref_syntax(context: &str, schema_ref: &SchemaOrRef, errors: &mut Vec<String>) {
    let Some(ref_path) = schema_ref.ref_path() else {
        return;
    };

    if ref_path.is_empty() {
        errors.push(format!("{}: empty $ref", context));
    } else if ref_path.ends_with('/') {
        errors.push(format!("{}: $ref {:?} has no target segment", context, ref_path));
    }
}
