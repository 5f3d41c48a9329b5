//! Identifier naming conventions for generated members.

/// Prefix of every generated field identifier.
pub const FIELD_PREFIX: &str = "FIELD_";

/// Constant holding the table name.
pub const TABLE_IDENTIFIER: &str = "TABLE";

pub const FULL_PROJECTION_IDENTIFIER: &str = "FULL_PROJECTION";
pub const CREATE_TABLE_IDENTIFIER: &str = "CREATE_TABLE";

/// Generated identifier treated as the table's primary key.
pub const PRIMARY_KEY_IDENTIFIER: &str = "FIELD_ID";

/// Convert a camel-case name to UPPER_SNAKE_CASE.
///
/// Every ASCII uppercase letter after the first character starts a new word,
/// so runs of capitals are split letter by letter (`userID` -> `USER_I_D`).
pub fn upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, ch) in name.chars().enumerate() {
        if idx > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}

/// Generated constant name for a field (`birthDate` -> `FIELD_BIRTH_DATE`).
pub fn field_identifier(field_name: &str) -> String {
    format!("{FIELD_PREFIX}{}", upper_snake(field_name))
}

pub fn is_primary_key_identifier(identifier: &str) -> bool {
    identifier.eq_ignore_ascii_case(PRIMARY_KEY_IDENTIFIER)
}

/// Local used to stage a nullable read (`birthday` -> `tmpBirthday`).
pub fn temp_variable(field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        Some(first) => format!("tmp{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "tmp".to_string(),
    }
}

const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// True for a legal Java identifier that is not a reserved word.
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$') {
        return false;
    }
    !RESERVED_WORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_camel_case() {
        assert_eq!(field_identifier("age"), "FIELD_AGE");
        assert_eq!(field_identifier("birthDate"), "FIELD_BIRTH_DATE");
        assert_eq!(field_identifier("Name"), "FIELD_NAME");
        assert_eq!(field_identifier("id"), "FIELD_ID");
    }

    #[test]
    fn splits_every_capital() {
        assert_eq!(upper_snake("ID"), "I_D");
        assert_eq!(upper_snake("userID"), "USER_I_D");
        assert_eq!(upper_snake("snake_case"), "SNAKE_CASE");
    }

    #[test]
    fn primary_key_is_case_insensitive() {
        assert!(is_primary_key_identifier("FIELD_ID"));
        assert!(is_primary_key_identifier("field_id"));
        assert!(!is_primary_key_identifier("FIELD_I_D"));
    }

    #[test]
    fn temp_variables() {
        assert_eq!(temp_variable("birthday"), "tmpBirthday");
        assert_eq!(temp_variable("x"), "tmpX");
    }

    #[test]
    fn java_identifiers() {
        assert!(is_java_identifier("age"));
        assert!(is_java_identifier("_x$1"));
        assert!(!is_java_identifier("1abc"));
        assert!(!is_java_identifier("class"));
        assert!(!is_java_identifier("a-b"));
        assert!(!is_java_identifier(""));
    }
}
