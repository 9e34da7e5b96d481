//! OpenAPI 3.0 document loading for oas2proto
//!
//! This crate owns the typed document model, the JSON/YAML front-end, and
//! structural validation. The translator in `oas2proto-generator` consumes
//! the `OpenApiDocument` this crate hands over and assumes it has already
//! been validated.
//!
//! ## Usage
//! ```rust,ignore
//! use oas2proto_parser::OpenApiParser;
//!
//! let document = OpenApiParser::from_file("petstore.yaml")?.validated()?;
//! ```

mod parser;
mod types;
mod validator;

pub use parser::OpenApiParser;
pub use types::*;
pub use validator::validate;
