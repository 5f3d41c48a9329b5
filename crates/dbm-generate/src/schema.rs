//! Relational-schema artifacts.
//!
//! Column order everywhere follows field declaration order.


use dbm_model::catalog::{PRIMARY_KEY_CLAUSE, sql_type};
use dbm_model::naming::{TABLE_IDENTIFIER, is_primary_key_identifier};
use dbm_model::{ClassSpec, GeneratedConstant, GenerationOptions, Result};

use crate::column::{ColumnReader, ValueConversion};

/// Comment carried by the table-name constant.
pub const TABLE_COMMENT: &str = "TODO: verify";

/// `TABLE` followed by one `FIELD_*` constant per field.
///
/// Each value is the untransformed runtime name: the class name for `TABLE`,
/// the field name for fields.
pub fn constants(class: &ClassSpec) -> Vec<GeneratedConstant> {
    let mut constants = Vec::with_capacity(class.fields.len() + 1);
    constants.push(GeneratedConstant::new(TABLE_IDENTIFIER, &class.name).with_comment(TABLE_COMMENT));
    constants.extend(
        class
            .fields
            .iter()
            .map(|field| GeneratedConstant::new(field.identifier(), &field.name)),
    );
    constants
}

pub fn full_projection(class: &ClassSpec) -> String {
    format!(
        "public static final String[] FULL_PROJECTION = new String[] {{\n{}\n}};\n",
        class.identifiers().join(",")
    )
}

/// `CREATE TABLE` as a string-concatenation expression, one column per line.
///
/// Identifiers are right-padded to the longest identifier plus three spaces.
/// The field whose identifier is `FIELD_ID` becomes the primary key whatever
/// its declared type.
pub fn create_table(class: &ClassSpec) -> Result<String> {
    let identifiers = class.identifiers();
    let width = identifiers.iter().map(String::len).max().unwrap_or(0) + 3;

    let mut out = String::from("public static final String CREATE_TABLE = \"CREATE TABLE IF NOT EXISTS \"\n");
    out.push_str("+ TABLE\n");
    out.push_str("+ \" (\"\n");

    let last = class.fields.len().saturating_sub(1);
    for (idx, (field, identifier)) in class.fields.iter().zip(&identifiers).enumerate() {
        let comma = if idx == last { "" } else { "," };
        let column = if is_primary_key_identifier(identifier) {
            PRIMARY_KEY_CLAUSE
        } else {
            sql_type(&field.type_name()?).as_sql()
        };
        out.push_str(&format!("+ {identifier:<width$} + \" {column}{comma} \"\n"));
    }

    out.push_str("+ \");\";\n");
    Ok(out)
}

/// `createFromCursor(android.database.Cursor)`: an equality chain over the
/// generated identifiers. Unknown columns are logged and skipped.
pub fn cursor_deserializer(class: &ClassSpec, options: &GenerationOptions) -> Result<String> {
    let mut out = String::from("private final void createFromCursor(android.database.Cursor c){\n");
    out.push_str("    int colCount = c.getColumnCount();\n");
    out.push_str("    for(int i=0; i<colCount; i++){\n");
    out.push_str("        final String colname = c.getColumnName(i);\n");

    for (idx, field) in class.fields.iter().enumerate() {
        let reader = ColumnReader::for_type(&field.type_name()?);
        let keyword = if idx == 0 { "        if" } else { " else if" };
        out.push_str(&format!(
            "{keyword} ({}.equals(colname)){{\n            this.{} = {};\n        }}",
            field.identifier(),
            field.name,
            reader.expression()
        ));
    }
    if !class.fields.is_empty() {
        out.push_str(&format!(
            " else {{\n            android.util.Log.w({}, \"Unknown column name: \" + colname);\n        }}\n",
            options.log_tag
        ));
    }

    out.push_str("    }\n");
    out.push_str("}\n");
    Ok(out)
}

/// `getDbContentValues()`: every field keyed by its identifier, non-primitive
/// fields guarded against null.
pub fn content_values(class: &ClassSpec) -> Result<String> {
    let mut out = String::from("public android.content.ContentValues getDbContentValues() {\n");
    out.push_str("    android.content.ContentValues args = new android.content.ContentValues();\n");

    for field in &class.fields {
        let value = ValueConversion::for_type(&field.type_name()?).apply(&field.name);
        if field.is_primitive {
            out.push_str(&format!("    args.put({}, {value});\n", field.identifier()));
        } else {
            out.push_str(&format!("    if (this.{} != null)\n", field.name));
            out.push_str(&format!("        args.put({}, {value});\n", field.identifier()));
        }
    }

    out.push_str("    return args;\n");
    out.push_str("}\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbm_model::FieldSpec;

    fn account() -> ClassSpec {
        ClassSpec::new("Account")
            .with_field(FieldSpec::primitive("id", "long"))
            .with_field(FieldSpec::object("photo", "byte[]"))
            .with_field(FieldSpec::primitive("active", "boolean"))
    }

    #[test]
    fn id_field_is_primary_key() {
        let text = create_table(&account()).unwrap();
        assert!(text.contains("+ FIELD_ID        + \" INTEGER PRIMARY KEY AUTOINCREMENT, \"\n"));
        assert!(text.contains("+ FIELD_PHOTO     + \" BLOB, \"\n"));
        assert!(text.contains("+ FIELD_ACTIVE    + \" INTEGER DEFAULT 0 \"\n"));
        assert!(text.ends_with("+ \");\";\n"));
    }

    #[test]
    fn primary_key_ignores_declared_type() {
        let class = ClassSpec::new("Note").with_field(FieldSpec::object("id", "String"));
        let text = create_table(&class).unwrap();
        assert!(text.contains("+ FIELD_ID    + \" INTEGER PRIMARY KEY AUTOINCREMENT \"\n"));
    }

    #[test]
    fn empty_class_has_no_column_lines() {
        let class = ClassSpec::new("Empty");
        assert_eq!(
            full_projection(&class),
            "public static final String[] FULL_PROJECTION = new String[] {\n\n};\n"
        );
        let cursor = cursor_deserializer(&class, &GenerationOptions::default()).unwrap();
        assert!(!cursor.contains("Unknown column name"));
        assert_eq!(create_table(&class).unwrap().lines().count(), 4);
    }

    #[test]
    fn log_tag_is_configurable() {
        let options = GenerationOptions::default().with_log_tag("TAG");
        let text = cursor_deserializer(&account(), &options).unwrap();
        assert!(text.contains("android.util.Log.w(TAG, \"Unknown column name: \" + colname);"));
    }

    #[test]
    fn boolean_content_value_is_converted() {
        let text = content_values(&account()).unwrap();
        assert!(text.contains("    args.put(FIELD_ACTIVE, active ? 1 : 0);\n"));
        assert!(text.contains("    if (this.photo != null)\n        args.put(FIELD_PHOTO, photo);\n"));
    }
}
