//! Identifier normalization
//!
//! Pure functions converting arbitrary OpenAPI names into valid proto3
//! identifiers: type names, enum constants, and RPC name fragments.

/// Upper-case the first character of a name
///
/// # Examples
/// ```
/// use oas2proto_generator::naming::capitalize;
///
/// assert_eq!(capitalize("user"), "User");
/// assert_eq!(capitalize("User"), "User");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Normalize an enum literal into a proto constant name
///
/// The literal is rendered as a bare string, upper-cased, and every
/// character outside `[A-Za-z0-9]` becomes `_`. Collisions between distinct
/// literals (`"a-b"` and `"a_b"` both give `A_B`) are not deduplicated.
pub fn enum_constant(value: &serde_json::Value) -> String {
    let literal = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    literal
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Flatten a URL path template into an identifier fragment
///
/// Every `{`, `}`, `/`, `-` becomes `_`, then runs of `_` collapse into one.
/// Used to synthesize an RPC name when an operation has no explicit
/// `operationId`.
pub fn format_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        let mapped = match c {
            '{' | '}' | '/' | '-' => '_',
            other => other,
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("createUser"), "CreateUser");
        assert_eq!(capitalize("User"), "User");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_enum_constant_strings() {
        assert_eq!(enum_constant(&json!("available")), "AVAILABLE");
        assert_eq!(enum_constant(&json!("Value-1")), "VALUE_1");
        assert_eq!(enum_constant(&json!("a b.c")), "A_B_C");
    }

    #[test]
    fn test_enum_constant_non_strings() {
        assert_eq!(enum_constant(&json!(42)), "42");
        assert_eq!(enum_constant(&json!(true)), "TRUE");
    }

    #[test]
    fn test_enum_constant_collisions_not_deduped() {
        assert_eq!(enum_constant(&json!("a-b")), enum_constant(&json!("a_b")));
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path("/users"), "_users");
        assert_eq!(format_path("/users/{id}"), "_users_id_");
        assert_eq!(format_path("/pet-store/{pet-id}/owner"), "_pet_store_pet_id_owner");
    }
}
