//! Parcelable implementation artifacts.

use dbm_codec::Resolved;
use dbm_model::FieldSpec;

pub fn describe_contents() -> String {
    "@Override\npublic int describeContents() {\n    return 0;\n}\n".to_string()
}

/// `writeToParcel` over the resolved fields, in field order.
pub fn write_to_parcel(fields: &[(&FieldSpec, Resolved)]) -> String {
    let mut out = String::from("@Override\npublic void writeToParcel(android.os.Parcel dest, int flags) {\n");
    for (field, resolved) in fields {
        push_indented(&mut out, &resolved.write(field));
    }
    out.push_str("}\n");
    out
}

/// The private constructor reading every field back, in field order.
pub fn parcel_constructor(class_name: &str, fields: &[(&FieldSpec, Resolved)]) -> String {
    let mut out = format!("private {class_name}(android.os.Parcel in) {{\n");
    for (field, resolved) in fields {
        push_indented(&mut out, &resolved.read(field));
    }
    out.push_str("}\n");
    out
}

pub fn default_constructor(class_name: &str) -> String {
    format!("public {class_name}() {{\n}}\n")
}

pub fn creator(class_name: &str) -> String {
    format!(
        "public static final android.os.Parcelable.Creator<{class_name}> CREATOR = new android.os.Parcelable.Creator<{class_name}>() {{\n\
         \x20   @Override\n\
         \x20   public {class_name} createFromParcel(android.os.Parcel source) {{\n\
         \x20       return new {class_name}(source);\n\
         \x20   }}\n\
         \n\
         \x20   @Override\n\
         \x20   public {class_name}[] newArray(int size) {{\n\
         \x20       return new {class_name}[size];\n\
         \x20   }}\n\
         }};\n"
    )
}

fn push_indented(out: &mut String, statements: &str) {
    for line in statements.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_template() {
        let text = creator("Person");
        assert!(text.starts_with(
            "public static final android.os.Parcelable.Creator<Person> CREATOR = new android.os.Parcelable.Creator<Person>() {\n"
        ));
        assert!(text.contains("    public Person createFromParcel(android.os.Parcel source) {\n        return new Person(source);\n    }\n\n"));
        assert!(text.contains("    public Person[] newArray(int size) {\n        return new Person[size];\n    }\n"));
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn default_constructor_is_empty() {
        assert_eq!(default_constructor("Person"), "public Person() {\n}\n");
    }
}
