//! Operation translation
//!
//! Walks every path/method pair in the document and emits one RPC record per
//! operation, deriving the RPC name, request type, response type, and the
//! `google.api.http` binding.

use crate::naming::{capitalize, format_path};
use crate::proto::{HttpBinding, Rpc, ServiceDecl};
use crate::type_map;
use oas2proto_common::HttpMethod;
use oas2proto_parser::{OpenApiDocument, Operation};

/// Name of the single emitted service
pub const SERVICE_NAME: &str = "ApiService";

/// Translate every operation into the single service declaration
///
/// Paths iterate lexicographically; methods on a path iterate in the fixed
/// order defined by [`HttpMethod::ALL`].
pub fn translate_operations(document: &OpenApiDocument) -> ServiceDecl {
    let mut rpcs = Vec::new();

    for (path, path_item) in &document.paths {
        for (method, operation) in path_item.operations() {
            rpcs.push(translate_operation(path, method, operation));
        }
    }

    ServiceDecl {
        name: SERVICE_NAME.to_string(),
        rpcs,
    }
}

fn translate_operation(path: &str, method: HttpMethod, operation: &Operation) -> Rpc {
    let name = operation
        .operation_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| synthesized_rpc_name(method, path));

    Rpc {
        name,
        request_type: request_type(operation),
        response_type: response_type(operation),
        binding: HttpBinding {
            method,
            path: path.to_string(),
            body: method.has_body(),
        },
    }
}

/// RPC name for an operation without an explicit `operationId`
///
/// Both halves are capitalized: `GET /users/{id}` gives `GetUsers_id_`.
fn synthesized_rpc_name(method: HttpMethod, path: &str) -> String {
    let path_part = format_path(path);
    format!(
        "{}{}",
        capitalize(method.as_str()),
        capitalize(path_part.trim_start_matches('_'))
    )
}

/// First request-body content entry with a schema, or the empty sentinel
fn request_type(operation: &Operation) -> String {
    if let Some(body) = &operation.request_body {
        for media in body.content.values() {
            if let Some(schema_ref) = &media.schema {
                return type_map::payload_type(schema_ref);
            }
        }
    }
    type_map::EMPTY_TYPE.to_string()
}

/// Payload of the first `2xx`/`default` response, or the empty sentinel
///
/// Only one response status is ever considered: once a matching status is
/// found, no other response is inspected even if this one has no schema.
fn response_type(operation: &Operation) -> String {
    for (status, response) in &operation.responses {
        if status.starts_with('2') || status == "default" {
            for media in response.content.values() {
                if let Some(schema_ref) = &media.schema {
                    return type_map::payload_type(schema_ref);
                }
            }
            break;
        }
    }
    type_map::EMPTY_TYPE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas2proto_parser::OpenApiParser;

    fn document(paths_json: &str) -> OpenApiDocument {
        let source = format!(
            r#"{{"openapi": "3.0.0", "info": {{"title": "t", "version": "1"}},
                "paths": {}}}"#,
            paths_json
        );
        OpenApiParser::from_source(&source).unwrap().validated().unwrap()
    }

    #[test]
    fn test_explicit_operation_id_wins() {
        let doc = document(
            r##"{"/users": {"post": {
                "operationId": "createUser",
                "requestBody": {"content": {"application/json": {
                    "schema": {"$ref": "#/components/schemas/User"}}}},
                "responses": {"200": {"description": "OK", "content":
                    {"application/json": {"schema": {"$ref": "#/components/schemas/User"}}}}}
            }}}"##,
        );

        let service = translate_operations(&doc);
        assert_eq!(service.rpcs.len(), 1);
        let rpc = &service.rpcs[0];
        assert_eq!(rpc.name, "createUser");
        assert_eq!(rpc.request_type, "User");
        assert_eq!(rpc.response_type, "User");
        assert_eq!(rpc.binding.method, HttpMethod::Post);
        assert_eq!(rpc.binding.path, "/users");
        assert!(rpc.binding.body);
    }

    #[test]
    fn test_synthesized_name_from_path() {
        let doc = document(
            r##"{"/users/{id}": {"get": {
                "responses": {"200": {"description": "OK", "content":
                    {"application/json": {"schema": {"$ref": "#/components/schemas/User"}}}}}
            }}}"##,
        );

        let rpc = &translate_operations(&doc).rpcs[0];
        assert_eq!(rpc.name, "GetUsers_id_");
        assert_eq!(rpc.request_type, type_map::EMPTY_TYPE);
        assert_eq!(rpc.response_type, "User");
        assert_eq!(rpc.binding.path, "/users/{id}");
        assert!(!rpc.binding.body);
    }

    #[test]
    fn test_empty_operation_id_falls_back_to_synthesis() {
        let doc = document(
            r#"{"/users": {"get": {
                "operationId": "",
                "responses": {"200": {"description": "OK"}}
            }}}"#,
        );
        assert_eq!(translate_operations(&doc).rpcs[0].name, "GetUsers");
    }

    #[test]
    fn test_inline_request_body_is_empty_payload() {
        let doc = document(
            r#"{"/users": {"post": {
                "operationId": "createUser",
                "requestBody": {"content": {"application/json": {"schema": {
                    "type": "object", "properties": {"name": {"type": "string"}}}}}},
                "responses": {"201": {"description": "Created"}}
            }}}"#,
        );

        let rpc = &translate_operations(&doc).rpcs[0];
        assert_eq!(rpc.request_type, type_map::EMPTY_TYPE);
        assert_eq!(rpc.response_type, type_map::EMPTY_TYPE);
    }

    #[test]
    fn test_only_first_matching_response_considered() {
        // "200" has no schema; "201" does, but it is never inspected.
        let doc = document(
            r##"{"/users": {"get": {
                "responses": {
                    "200": {"description": "no content"},
                    "201": {"description": "Created", "content":
                        {"application/json": {"schema": {"$ref": "#/components/schemas/User"}}}}
                }
            }}}"##,
        );
        assert_eq!(
            translate_operations(&doc).rpcs[0].response_type,
            type_map::EMPTY_TYPE
        );
    }

    #[test]
    fn test_default_response_matches() {
        let doc = document(
            r##"{"/users": {"delete": {
                "responses": {
                    "404": {"description": "missing"},
                    "default": {"description": "fallback", "content":
                        {"application/json": {"schema": {"$ref": "#/components/schemas/Err"}}}}
                }
            }}}"##,
        );
        assert_eq!(translate_operations(&doc).rpcs[0].response_type, "Err");
    }

    #[test]
    fn test_path_and_method_iteration_order() {
        let doc = document(
            r#"{"/b": {"get": {"responses": {}}},
                "/a": {
                    "post": {"responses": {}},
                    "get": {"responses": {}}
                }}"#,
        );

        let service = translate_operations(&doc);
        let names: Vec<&str> = service
            .rpcs
            .iter()
            .map(|rpc| rpc.name.as_str())
            .collect();
        assert_eq!(names, vec!["GetA", "PostA", "GetB"]);
    }
}
