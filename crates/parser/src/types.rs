//! OpenAPI 3.0 type definitions
//!
//! Simplified representation focusing on the constructs the proto translator
//! consumes. Named collections use `BTreeMap` so traversal order is
//! lexicographic and the emitted proto is deterministic across runs.

use oas2proto_common::HttpMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version (e.g., "3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// API paths (endpoints)
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,

    /// Reusable components
    #[serde(default)]
    pub components: Option<Components>,
}

/// API information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API version
    pub version: String,

    /// API description
    #[serde(default)]
    pub description: Option<String>,
}

/// Path item (operations for a path)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,

    #[serde(default)]
    pub put: Option<Operation>,

    #[serde(default)]
    pub post: Option<Operation>,

    #[serde(default)]
    pub delete: Option<Operation>,

    #[serde(default)]
    pub options: Option<Operation>,

    #[serde(default)]
    pub head: Option<Operation>,

    #[serde(default)]
    pub patch: Option<Operation>,

    #[serde(default)]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Iterate the operations defined on this path, in the fixed
    /// GET, PUT, POST, DELETE, OPTIONS, HEAD, PATCH, TRACE order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .iter()
            .filter_map(move |&method| self.operation(method).map(|op| (method, op)))
    }

    /// Look up the operation for a single method
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    /// Operation ID (unique identifier)
    #[serde(rename = "operationId")]
    #[serde(default)]
    pub operation_id: Option<String>,

    /// Summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Request body
    #[serde(rename = "requestBody")]
    #[serde(default)]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code (or "default")
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
}

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content representations keyed by media type
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,

    /// Required flag
    #[serde(default)]
    pub required: bool,
}

/// Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Description
    #[serde(default)]
    pub description: String,

    /// Content representations keyed by media type
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,
}

/// Media type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema
    #[serde(default)]
    pub schema: Option<SchemaOrRef>,
}

/// Schema or reference
///
/// `Reference` is listed first so a `{"$ref": ...}` object can never fall
/// into the inline-schema arm (every `Schema` field is defaulted, so the
/// inline arm would otherwise match anything).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    /// Reference to a named schema
    Reference {
        #[serde(rename = "$ref")]
        ref_path: String,
    },

    /// Inline schema
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// The `$ref` target, if this is a reference
    pub fn ref_path(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Reference { ref_path } => Some(ref_path),
            SchemaOrRef::Schema(_) => None,
        }
    }

    /// The inline schema, if this is not a reference
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Reference { .. } => None,
            SchemaOrRef::Schema(schema) => Some(schema),
        }
    }
}

/// Closed variant over the OpenAPI `type` keyword
///
/// Anything outside the six specified tags deserializes to `Unknown`, which
/// keeps the "unknown maps to string" rule an explicit match arm downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Integer,
    Number,
    Boolean,
    String,
    Array,
    Object,
    Unknown,
}

impl TypeTag {
    /// Map a `type` keyword onto the closed variant
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "integer" => TypeTag::Integer,
            "number" => TypeTag::Number,
            "boolean" => TypeTag::Boolean,
            "string" => TypeTag::String,
            "array" => TypeTag::Array,
            "object" => TypeTag::Object,
            _ => TypeTag::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keyword = String::deserialize(deserializer)?;
        Ok(TypeTag::from_keyword(&keyword))
    }
}

/// Schema definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Type tag: string, number, integer, boolean, array, object
    #[serde(rename = "type")]
    #[serde(default)]
    pub schema_type: Option<TypeTag>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Properties (for object type)
    #[serde(default)]
    pub properties: BTreeMap<String, SchemaOrRef>,

    /// Required property names
    #[serde(default)]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default)]
    pub items: Option<Box<SchemaOrRef>>,

    /// Enumeration literals, in source order
    #[serde(rename = "enum")]
    #[serde(default)]
    pub enum_values: Vec<serde_json::Value>,
}

/// Reusable components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    /// Named schemas
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
}

impl OpenApiDocument {
    /// Named component schemas, or an empty map if the document has none
    pub fn schemas(&self) -> &BTreeMap<String, Schema> {
        static EMPTY: BTreeMap<String, Schema> = BTreeMap::new();
        self.components.as_ref().map_or(&EMPTY, |c| &c.schemas)
    }
}
