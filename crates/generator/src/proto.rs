//! Proto declaration records and the final render pass
//!
//! The translators accumulate immutable declaration records; this module
//! serializes them into proto3 text in one pass at the end. Keeping the two
//! steps apart lets tests assert on structured records instead of strings.

use oas2proto_common::HttpMethod;
use serde::Serialize;

/// A complete proto file: header, type declarations, one service
#[derive(Debug, Clone, Serialize)]
pub struct ProtoFile {
    /// Proto package name
    pub package: String,

    /// Enum and message declarations, in emission order
    pub declarations: Vec<Declaration>,

    /// The single service block
    pub service: ServiceDecl,
}

/// A top-level type declaration
#[derive(Debug, Clone, Serialize)]
pub enum Declaration {
    Enum(EnumDecl),
    Message(MessageDecl),
}

/// An enum declaration, top-level or nested
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDecl {
    pub name: String,
    pub constants: Vec<EnumConstant>,
}

/// One enum constant with its ordinal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumConstant {
    pub name: String,
    pub ordinal: i32,
}

/// A message declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDecl {
    pub name: String,

    /// Inline enums for enum-valued properties, emitted before the fields
    pub nested_enums: Vec<EnumDecl>,

    pub fields: Vec<Field>,
}

/// One numbered message field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Present when the property is not in the schema's required list
    pub optional: bool,

    /// Resolved proto type token (scalar, `repeated ...`, map, or type name)
    pub type_name: String,

    /// Raw source property name, not normalized
    pub name: String,

    /// Sequential field number, starting at 1
    pub number: u32,
}

/// The emitted service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDecl {
    pub name: String,
    pub rpcs: Vec<Rpc>,
}

/// One RPC declaration with its HTTP binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rpc {
    pub name: String,
    pub request_type: String,
    pub response_type: String,
    pub binding: HttpBinding,
}

/// `google.api.http` binding annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpBinding {
    /// HTTP verb of the binding
    pub method: HttpMethod,

    /// Raw source path template, `{param}` placeholders included
    pub path: String,

    /// Whether the binding carries a `body: "*"` marker
    pub body: bool,
}

impl ProtoFile {
    /// Render the file as proto3 text
    ///
    /// Fixed order: header, declarations (blank-line separated), service.
    /// Byte-identical output for identical records.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("syntax = \"proto3\";\n\n");
        out.push_str(&format!("package {};\n", self.package));
        out.push_str("import \"google/api/annotations.proto\";\n");
        out.push_str("import \"google/protobuf/struct.proto\";\n");
        out.push_str("import \"google/protobuf/empty.proto\";\n\n");

        for declaration in &self.declarations {
            match declaration {
                Declaration::Enum(decl) => render_enum(&mut out, decl, ""),
                Declaration::Message(decl) => render_message(&mut out, decl),
            }
            out.push('\n');
        }

        render_service(&mut out, &self.service);
        out
    }
}

fn render_enum(out: &mut String, decl: &EnumDecl, indent: &str) {
    out.push_str(&format!("{}enum {} {{\n", indent, decl.name));
    for constant in &decl.constants {
        out.push_str(&format!(
            "{}  {} = {};\n",
            indent, constant.name, constant.ordinal
        ));
    }
    out.push_str(&format!("{}}}\n", indent));
}

fn render_message(out: &mut String, decl: &MessageDecl) {
    out.push_str(&format!("message {} {{\n", decl.name));
    for nested in &decl.nested_enums {
        render_enum(out, nested, "  ");
    }
    for field in &decl.fields {
        let optional = if field.optional { "optional " } else { "" };
        out.push_str(&format!(
            "  {}{} {} = {};\n",
            optional, field.type_name, field.name, field.number
        ));
    }
    out.push_str("}\n");
}

fn render_service(out: &mut String, service: &ServiceDecl) {
    out.push_str(&format!("service {} {{\n", service.name));
    for rpc in &service.rpcs {
        out.push_str(&format!(
            "  rpc {}({}) returns ({}) {{\n",
            rpc.name, rpc.request_type, rpc.response_type
        ));
        out.push_str("    option (google.api.http) = {\n");
        out.push_str(&format!(
            "      {}: \"{}\"\n",
            rpc.binding.method.as_str(),
            rpc.binding.path
        ));
        if rpc.binding.body {
            out.push_str("      body: \"*\"\n");
        }
        out.push_str("    };\n  }\n");
    }
    out.push_str("}\n");
}
