//! Type resolution from OpenAPI schemas to proto3 type tokens
//!
//! Maps a schema node (inline or reference) to the proto type used for a
//! field or an RPC payload. Resolution is permissive: a `$ref` becomes the
//! capitalized terminal segment of its target with no existence check, so a
//! dangling reference yields a type name for a message that may never be
//! declared.

use crate::naming::capitalize;
use oas2proto_parser::{Schema, SchemaOrRef, TypeTag};

/// Payload type substituted when an operation has no applicable schema
pub const EMPTY_TYPE: &str = "google.protobuf.Empty";

/// Resolve the proto type for a message field
///
/// `field` is the property name, used to name inline enums
/// (`status` with an `enum` list becomes `StatusEnum`).
pub fn field_type(field: &str, schema_ref: &SchemaOrRef) -> String {
    match schema_ref {
        SchemaOrRef::Reference { ref_path } => ref_type_name(ref_path),
        SchemaOrRef::Schema(schema) => inline_field_type(field, schema),
    }
}

/// Resolve the proto type for a request or response payload
///
/// Only references resolve to a message type here; an inline body schema is
/// treated as no payload and yields the empty sentinel. This asymmetry with
/// [`field_type`] is deliberate: inline bodies have no name to emit a
/// message under.
pub fn payload_type(schema_ref: &SchemaOrRef) -> String {
    match schema_ref {
        SchemaOrRef::Reference { ref_path } => ref_type_name(ref_path),
        SchemaOrRef::Schema(_) => EMPTY_TYPE.to_string(),
    }
}

/// Capitalized terminal path segment of a `$ref` target
fn ref_type_name(ref_path: &str) -> String {
    let last = ref_path.rsplit('/').next().unwrap_or(ref_path);
    capitalize(last)
}

fn inline_field_type(field: &str, schema: &Schema) -> String {
    if !schema.enum_values.is_empty() {
        return format!("{}Enum", capitalize(field));
    }

    match schema.schema_type {
        Some(TypeTag::Integer) => "int32".to_string(),
        Some(TypeTag::Number) => "double".to_string(),
        Some(TypeTag::Boolean) => "bool".to_string(),
        Some(TypeTag::String) => "string".to_string(),
        Some(TypeTag::Array) => match &schema.items {
            Some(items) => format!("repeated {}", field_type(field, items)),
            None => "string".to_string(),
        },
        Some(TypeTag::Object) => "map<string, string>".to_string(),
        // Unknown and missing tags both fall back to string, intentionally.
        Some(TypeTag::Unknown) | None => "string".to_string(),
    }
}
