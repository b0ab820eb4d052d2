//! Java naming rules.

use std::path::PathBuf;

/// Name of the static initializer block as it appears among methods.
pub const STATIC_INITIALIZER: &str = "<clinit>";

/// Java reserved words and literals that cannot be used as identifiers.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    // literals
    "true",
    "false",
    "null",
];

/// Check if a name is a Java reserved word or literal.
pub fn is_reserved(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Check if `name` is a legal Java identifier.
///
/// The first character must be a letter, `_` or `$`; the rest may also be
/// digits. Reserved words and literals are rejected.
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_identifier_start(first) || !chars.all(is_identifier_part) {
        return false;
    }
    !is_reserved(name)
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Source-level spelling of a qualified binary name (`a.Outer$Inner` -> `a.Outer.Inner`).
pub fn source_name(qualified: &str) -> String {
    qualified.replace('$', ".")
}

/// Relative stub path of a class, without extension (`a.b.C` -> `a/b/C`).
pub fn stub_path(qualified: &str) -> PathBuf {
    qualified.split('.').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_java_identifier("area"));
        assert!(is_java_identifier("_x"));
        assert!(is_java_identifier("$plain"));
        assert!(is_java_identifier("getX2"));
        assert!(is_java_identifier("größe"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("2x"));
        assert!(!is_java_identifier("my-method"));
        assert!(!is_java_identifier("has space"));
        assert!(!is_java_identifier("<clinit>"));
    }

    #[test]
    fn test_keywords_and_literals_rejected() {
        assert!(!is_java_identifier("class"));
        assert!(!is_java_identifier("goto"));
        assert!(!is_java_identifier("null"));
        assert!(!is_java_identifier("true"));
        assert!(is_java_identifier("Class"));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name("geo.Shapes$Circle"), "geo.Shapes.Circle");
        assert_eq!(source_name("Plain"), "Plain");
    }

    #[test]
    fn test_stub_path() {
        assert_eq!(stub_path("geo.model.Pt"), PathBuf::from("geo/model/Pt"));
        assert_eq!(stub_path("Pt"), PathBuf::from("Pt"));
    }
}
