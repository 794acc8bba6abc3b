//! Helpers for PHP-style fully qualified names (`App\Models\Post`).
//!
//! All functions are pure and operate on borrowed strings. A single leading
//! separator (`\App\Models\Post`) is accepted everywhere and ignored.

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Remove a single leading namespace separator, if present.
pub fn strip_leading_separator(fqn: &str) -> &str {
    fqn.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(fqn)
}

/// Last segment of a fully qualified name (e.g., `App\Models\Post` -> `Post`).
pub fn class_basename(fqn: &str) -> &str {
    let fqn = strip_leading_separator(fqn);
    match fqn.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => &fqn[pos + 1..],
        None => fqn,
    }
}

/// Everything before the last segment (e.g., `App\Models\Post` -> `App\Models`).
///
/// Returns an empty string for names in the global namespace.
pub fn extract_namespace(fqn: &str) -> &str {
    let fqn = strip_leading_separator(fqn);
    match fqn.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => &fqn[..pos],
        None => "",
    }
}

/// Join a namespace and a name, skipping the separator for the global namespace.
pub fn join_fqn(namespace: &str, name: &str) -> String {
    let namespace = strip_leading_separator(namespace);
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, name)
    }
}

/// The namespace every name lives in, if they all share exactly one.
///
/// Returns `None` when the iterator is empty, when the names live in
/// different namespaces (including different nesting depths), or when the
/// shared namespace is the global one.
pub fn shared_namespace<'a>(fqns: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut shared: Option<&'a str> = None;

    for fqn in fqns {
        let namespace = extract_namespace(fqn);
        match shared {
            None => shared = Some(namespace),
            Some(existing) if existing == namespace => {}
            Some(_) => return None,
        }
    }

    shared.filter(|ns| !ns.is_empty())
}

/// Check that a single segment is a valid PHP identifier.
pub fn is_valid_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Check that every segment of a fully qualified name is a valid identifier.
pub fn is_valid_fqn(fqn: &str) -> bool {
    let fqn = strip_leading_separator(fqn);
    !fqn.is_empty() && fqn.split(NAMESPACE_SEPARATOR).all(is_valid_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_basename() {
        assert_eq!(class_basename("App\\Models\\Post"), "Post");
        assert_eq!(class_basename("\\App\\Models\\Post"), "Post");
        assert_eq!(class_basename("Post"), "Post");
    }

    #[test]
    fn test_extract_namespace() {
        assert_eq!(extract_namespace("App\\Models\\Post"), "App\\Models");
        assert_eq!(extract_namespace("\\App\\Post"), "App");
        assert_eq!(extract_namespace("Post"), "");
    }

    #[test]
    fn test_join_fqn() {
        assert_eq!(join_fqn("App\\Models", "Post"), "App\\Models\\Post");
        assert_eq!(join_fqn("", "Post"), "Post");
        assert_eq!(join_fqn("\\App", "Post"), "App\\Post");
    }

    #[test]
    fn test_shared_namespace() {
        assert_eq!(
            shared_namespace(["App\\Pages\\EditFoo", "App\\Pages\\CreateFoo"]),
            Some("App\\Pages")
        );
        assert_eq!(
            shared_namespace(["App\\Pages\\EditFoo", "App\\Other\\CreateFoo"]),
            None
        );
    }

    #[test]
    fn test_shared_namespace_mixed_depth() {
        assert_eq!(
            shared_namespace(["App\\Pages\\EditFoo", "App\\Pages\\Nested\\CreateFoo"]),
            None
        );
    }

    #[test]
    fn test_shared_namespace_empty_and_global() {
        assert_eq!(shared_namespace(std::iter::empty()), None);
        assert_eq!(shared_namespace(["EditFoo", "CreateFoo"]), None);
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("Post"));
        assert!(is_valid_identifier("_internal"));
        assert!(is_valid_identifier("Post2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2Post"));
        assert!(!is_valid_identifier("Post-Type"));
    }

    #[test]
    fn test_is_valid_fqn() {
        assert!(is_valid_fqn("App\\Models\\Post"));
        assert!(is_valid_fqn("\\App\\Models\\Post"));
        assert!(is_valid_fqn("Post"));
        assert!(!is_valid_fqn(""));
        assert!(!is_valid_fqn("App\\\\Post"));
        assert!(!is_valid_fqn("App\\Models\\"));
        assert!(!is_valid_fqn("App/Models/Post"));
    }
}
