//! Schema translation
//!
//! Walks the document's named component schemas in lexicographic order and
//! emits one declaration record per enum or object schema.

use crate::naming::{capitalize, enum_constant};
use crate::proto::{Declaration, EnumConstant, EnumDecl, Field, MessageDecl};
use crate::type_map;
use oas2proto_parser::{OpenApiDocument, Schema};
use std::collections::BTreeSet;

/// Translate every named schema into declaration records
///
/// Enum schemas become top-level enums, object schemas become messages. A
/// schema carrying both an enumeration and properties emits the enum under
/// `<Name>Enum` next to the `<Name>` message, so the file never declares one
/// top-level symbol twice. Schemas with neither (scalar or array aliases)
/// produce nothing.
pub fn translate_schemas(document: &OpenApiDocument) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for (name, schema) in document.schemas() {
        let has_properties = !schema.properties.is_empty();

        if !schema.enum_values.is_empty() {
            let enum_name = if has_properties {
                format!("{}Enum", capitalize(name))
            } else {
                capitalize(name)
            };
            declarations.push(Declaration::Enum(enum_decl(enum_name, schema)));
        }

        if has_properties {
            declarations.push(Declaration::Message(message_decl(name, schema)));
        }
    }

    declarations
}

fn enum_decl(name: String, schema: &Schema) -> EnumDecl {
    let constants = schema
        .enum_values
        .iter()
        .enumerate()
        .map(|(ordinal, value)| EnumConstant {
            name: enum_constant(value),
            ordinal: ordinal as i32,
        })
        .collect();

    EnumDecl { name, constants }
}

fn message_decl(name: &str, schema: &Schema) -> MessageDecl {
    // Inline enums for enum-valued properties come before any field.
    let mut nested_enums = Vec::new();
    for (property, schema_ref) in &schema.properties {
        if let Some(inline) = schema_ref.as_schema() {
            if !inline.enum_values.is_empty() {
                nested_enums.push(enum_decl(format!("{}Enum", capitalize(property)), inline));
            }
        }
    }

    let required: BTreeSet<&str> = schema.required.iter().map(String::as_str).collect();

    let fields = schema
        .properties
        .iter()
        .enumerate()
        .map(|(index, (property, schema_ref))| Field {
            optional: !required.contains(property.as_str()),
            type_name: type_map::field_type(property, schema_ref),
            name: property.clone(),
            number: index as u32 + 1,
        })
        .collect();

    MessageDecl {
        name: capitalize(name),
        nested_enums,
        fields,
    }
}
