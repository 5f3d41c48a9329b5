//! Static type knowledge: primitive and boxed tables, simple-name aliases and
//! SQL column affinity inference.

use serde::{Deserialize, Serialize};

use crate::types::TypeName;

/// Java primitive type keywords.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short",
];

/// Boxed wrappers in `java.lang`.
pub const BOXED_TYPES: &[&str] = &[
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Double",
    "java.lang.Float",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Short",
];

/// Types stored in an `INTEGER DEFAULT 0` column.
pub const INTEGER_TYPES: &[&str] = &[
    "byte",
    "double",
    "float",
    "int",
    "long",
    "short",
    "boolean",
    "java.lang.Byte",
    "java.lang.Double",
    "java.lang.Float",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Boolean",
];

pub const STRING_TYPE: &str = "java.lang.String";

/// Stored as epoch milliseconds.
pub const TIMESTAMP_TYPE: &str = "java.util.Date";

pub const BLOB_TYPE: &str = "byte[]";

/// Column clause for the field named by the id convention.
pub const PRIMARY_KEY_CLAUSE: &str = "INTEGER PRIMARY KEY AUTOINCREMENT";

/// SQLite column affinity of a generated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlType {
    Blob,
    Integer,
    Text,
}

impl SqlType {
    /// Column declaration used in `CREATE TABLE`.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Blob => "BLOB",
            Self::Integer => "INTEGER DEFAULT 0",
            Self::Text => "TEXT",
        }
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Infer the column affinity of a declared type.
///
/// Byte arrays are blobs; numeric, boolean and timestamp types are integers;
/// everything else is text.
pub fn sql_type(ty: &TypeName) -> SqlType {
    let text = ty.to_string();
    if text == BLOB_TYPE {
        SqlType::Blob
    } else if INTEGER_TYPES.contains(&text.as_str()) || text == TIMESTAMP_TYPE {
        SqlType::Integer
    } else {
        SqlType::Text
    }
}

pub fn is_primitive(type_name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&type_name)
}

pub fn is_boxed(type_name: &str) -> bool {
    BOXED_TYPES.contains(&type_name)
}

/// Qualified name for a well-known simple type name.
pub fn canonical_simple_name(name: &str) -> Option<&'static str> {
    let qualified = match name {
        "String" => STRING_TYPE,
        "Object" => "java.lang.Object",
        "CharSequence" => "java.lang.CharSequence",
        "Boolean" => "java.lang.Boolean",
        "Byte" => "java.lang.Byte",
        "Character" => "java.lang.Character",
        "Double" => "java.lang.Double",
        "Float" => "java.lang.Float",
        "Integer" => "java.lang.Integer",
        "Long" => "java.lang.Long",
        "Short" => "java.lang.Short",
        "Date" => TIMESTAMP_TYPE,
        "List" => "java.util.List",
        "ArrayList" => "java.util.ArrayList",
        "Map" => "java.util.Map",
        "HashMap" => "java.util.HashMap",
        "UUID" => "java.util.UUID",
        "Locale" => "java.util.Locale",
        "BigDecimal" => "java.math.BigDecimal",
        "BigInteger" => "java.math.BigInteger",
        "Serializable" => "java.io.Serializable",
        "Bundle" => "android.os.Bundle",
        "Parcelable" => "android.os.Parcelable",
        "SparseBooleanArray" => "android.util.SparseBooleanArray",
        _ => return None,
    };
    Some(qualified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(raw: &str) -> SqlType {
        sql_type(&TypeName::parse(raw).unwrap())
    }

    #[test]
    fn sql_type_table() {
        assert_eq!(infer("byte[]"), SqlType::Blob);
        assert_eq!(infer("boolean"), SqlType::Integer);
        assert_eq!(infer("Boolean"), SqlType::Integer);
        assert_eq!(infer("java.lang.Long"), SqlType::Integer);
        assert_eq!(infer("java.util.Date"), SqlType::Integer);
        assert_eq!(infer("String"), SqlType::Text);
        assert_eq!(infer("com.example.Thing"), SqlType::Text);
        // `char` and `Short` are not in the integer table.
        assert_eq!(infer("char"), SqlType::Text);
        assert_eq!(infer("java.lang.Short"), SqlType::Text);
    }

    #[test]
    fn sql_rendering() {
        assert_eq!(SqlType::Integer.as_sql(), "INTEGER DEFAULT 0");
        assert_eq!(SqlType::Blob.to_string(), "BLOB");
    }
}
