//! PHP reserved words.

/// Words that cannot be used as a class, interface or trait name.
///
/// Covers the language keywords and the reserved type names. PHP compares
/// them case-insensitively.
pub const PHP_RESERVED_WORDS: &[&str] = &[
    "__halt_compiler", "abstract", "and", "array", "as", "bool", "break", "callable", "case",
    "catch", "class", "clone", "const", "continue", "declare", "default", "die", "do", "echo",
    "else", "elseif", "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch",
    "endwhile", "enum", "eval", "exit", "extends", "false", "final", "finally", "float", "fn",
    "for", "foreach", "function", "global", "goto", "if", "implements", "include",
    "include_once", "instanceof", "insteadof", "int", "interface", "isset", "iterable", "list",
    "match", "mixed", "namespace", "never", "new", "null", "object", "or", "parent", "print",
    "private", "protected", "public", "readonly", "require", "require_once", "return", "self",
    "static", "string", "switch", "throw", "trait", "true", "try", "unset", "use", "var", "void",
    "while", "xor", "yield",
];

/// Check whether `name` is reserved (case-insensitive).
pub fn is_reserved(name: &str) -> bool {
    PHP_RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}
