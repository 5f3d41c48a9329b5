//! Cursor column readers and content-value conversions.
//!
//! Both tables match on the canonical type text, so `java.lang.Short` and
//! `char` fall through to the string reader.

use dbm_model::catalog::{BLOB_TYPE, TIMESTAMP_TYPE};
use dbm_model::TypeName;

/// Expression reading column `i` of cursor `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnReader {
    Byte,
    BoxedByte,
    Short,
    Int,
    Long,
    Double,
    Float,
    Blob,
    Boolean,
    BoxedBoolean,
    Timestamp,
    String,
}

impl ColumnReader {
    pub fn for_type(ty: &TypeName) -> Self {
        match ty.to_string().as_str() {
            "byte" => Self::Byte,
            "java.lang.Byte" => Self::BoxedByte,
            "short" => Self::Short,
            "int" | "java.lang.Integer" => Self::Int,
            "long" | "java.lang.Long" => Self::Long,
            "double" | "java.lang.Double" => Self::Double,
            "float" | "java.lang.Float" => Self::Float,
            BLOB_TYPE => Self::Blob,
            "boolean" => Self::Boolean,
            "java.lang.Boolean" => Self::BoxedBoolean,
            TIMESTAMP_TYPE => Self::Timestamp,
            _ => Self::String,
        }
    }

    pub fn expression(self) -> &'static str {
        match self {
            Self::Byte => "(byte) c.getInt(i)",
            Self::BoxedByte => "(Byte) c.getInt(i)",
            Self::Short => "c.getShort(i)",
            Self::Int => "c.getInt(i)",
            Self::Long => "c.getLong(i)",
            Self::Double => "c.getDouble(i)",
            Self::Float => "c.getFloat(i)",
            Self::Blob => "c.getBlob(i)",
            Self::Boolean => "c.getInt(i) == 1",
            Self::BoxedBoolean => "(Boolean) (c.getInt(i) == 1)",
            Self::Timestamp => "new java.util.Date(c.getLong(i))",
            Self::String => "c.getString(i)",
        }
    }
}

/// How a field value is stored in `ContentValues`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueConversion {
    Verbatim,
    BooleanAsInt,
    EpochMillis,
}

impl ValueConversion {
    pub fn for_type(ty: &TypeName) -> Self {
        match ty.to_string().as_str() {
            TIMESTAMP_TYPE => Self::EpochMillis,
            "boolean" | "java.lang.Boolean" => Self::BooleanAsInt,
            _ => Self::Verbatim,
        }
    }

    pub fn apply(self, field_name: &str) -> String {
        match self {
            Self::Verbatim => field_name.to_string(),
            Self::BooleanAsInt => format!("{field_name} ? 1 : 0"),
            Self::EpochMillis => format!("{field_name}.getTime()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(raw: &str) -> &'static str {
        ColumnReader::for_type(&TypeName::parse(raw).unwrap()).expression()
    }

    #[test]
    fn column_readers() {
        assert_eq!(reader("byte"), "(byte) c.getInt(i)");
        assert_eq!(reader("Byte"), "(Byte) c.getInt(i)");
        assert_eq!(reader("short"), "c.getShort(i)");
        assert_eq!(reader("Integer"), "c.getInt(i)");
        assert_eq!(reader("long"), "c.getLong(i)");
        assert_eq!(reader("java.lang.Double"), "c.getDouble(i)");
        assert_eq!(reader("float"), "c.getFloat(i)");
        assert_eq!(reader("byte[]"), "c.getBlob(i)");
        assert_eq!(reader("boolean"), "c.getInt(i) == 1");
        assert_eq!(reader("Boolean"), "(Boolean) (c.getInt(i) == 1)");
        assert_eq!(reader("Date"), "new java.util.Date(c.getLong(i))");
        assert_eq!(reader("String"), "c.getString(i)");
        assert_eq!(reader("java.lang.Short"), "c.getString(i)");
    }

    #[test]
    fn conversions() {
        let convert = |raw: &str, name: &str| {
            ValueConversion::for_type(&TypeName::parse(raw).unwrap()).apply(name)
        };
        assert_eq!(convert("Date", "birthday"), "birthday.getTime()");
        assert_eq!(convert("boolean", "active"), "active ? 1 : 0");
        assert_eq!(convert("Boolean", "active"), "active ? 1 : 0");
        assert_eq!(convert("int", "age"), "age");
    }
}
