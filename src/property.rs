use serde_yaml::{Mapping, Value};

/// Look up a frontmatter field, trying the nested blog object first,
/// then the flat key, then the flat fallback key.
///
/// A nested value only wins when `blog_object` is non-empty, maps to a
/// mapping in this document and that mapping contains `primary`. This
/// lets flat and nested frontmatter schemas coexist in one corpus.
#[must_use]
pub fn resolve<'a>(
    frontmatter: &'a Mapping,
    primary: &str,
    fallback: Option<&str>,
    blog_object: &str,
) -> Option<&'a Value> {
    if !blog_object.is_empty() {
        if let Some(Value::Mapping(nested)) = frontmatter.get(blog_object) {
            if let Some(value) = nested.get(primary) {
                return Some(value);
            }
        }
    }

    if let Some(value) = frontmatter.get(primary) {
        return Some(value);
    }

    fallback.and_then(|name| frontmatter.get(name))
}

/// Coerce a scalar frontmatter value to a string. Non-scalar values
/// don't coerce.
#[must_use]
pub fn string_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Frontmatter flags aren't type-checked, so truthiness follows the
/// loosest common rule: null, false, zero and the empty string are
/// falsy, everything else is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}
