//! Generated constants and read-only snapshots of a class body.
//!
//! A [`ClassSnapshot`] is what the host currently declares. It is an input
//! only; nothing in the generator mutates it in place.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `public static final String` constant produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedConstant {
    pub identifier: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl GeneratedConstant {
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Copy flagged for review: the note is appended to any existing comment.
    pub fn annotate(&self, note: &str) -> Self {
        let comment = match &self.comment {
            Some(existing) => format!("{existing}; {note}"),
            None => note.to_string(),
        };
        Self {
            comment: Some(comment),
            ..self.clone()
        }
    }

    /// The value as a Java string literal.
    pub fn literal(&self) -> String {
        let mut out = String::with_capacity(self.value.len() + 2);
        out.push('"');
        for ch in self.value.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                _ => out.push(ch),
            }
        }
        out.push('"');
        out
    }

    /// True when an existing initializer holds the same value, quoted or not.
    pub fn matches_literal(&self, existing: &str) -> bool {
        let existing = existing.trim();
        existing == self.value || existing == self.literal()
    }

    /// Declaration text, e.g. `public static final String TABLE = "Person"; //TODO: verify`.
    pub fn declaration(&self) -> String {
        match &self.comment {
            Some(comment) => format!(
                "public static final String {} = {}; //{}\n",
                self.identifier,
                self.literal(),
                comment
            ),
            None => format!(
                "public static final String {} = {};\n",
                self.identifier,
                self.literal()
            ),
        }
    }
}

/// A field the class already declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingDeclaration {
    pub identifier: String,
    /// Initializer text when it is a string literal (quoted or not).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    /// Full declaration text, when the host supplies it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ExistingDeclaration {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            literal: None,
            text: None,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A method or constructor the class already declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingMethod {
    pub name: String,
    /// Canonical parameter type names.
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ExistingMethod {
    pub fn new<I, S>(name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Field(ExistingDeclaration),
    Method(ExistingMethod),
}

impl Member {
    pub fn key(&self) -> MemberKey {
        match self {
            Self::Field(field) => MemberKey::field(&field.identifier),
            Self::Method(method) => MemberKey::Method {
                name: method.name.clone(),
                parameters: method.parameters.clone(),
            },
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Field(field) => field.text.as_deref(),
            Self::Method(method) => method.text.as_deref(),
        }
    }
}

/// Identity of a class member: fields by name, methods by signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberKey {
    Field {
        name: String,
    },
    Method {
        name: String,
        #[serde(default)]
        parameters: Vec<String>,
    },
}

impl MemberKey {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field { name: name.into() }
    }

    pub fn method<I, S>(name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Method {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Field { name } | Self::Method { name, .. } => name,
        }
    }
}

impl fmt::Display for MemberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { name } => write!(f, "{name}"),
            Self::Method { name, parameters } => write!(f, "{name}({})", parameters.join(",")),
        }
    }
}

/// Read-only view of a class body, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSnapshot {
    #[serde(default)]
    pub members: Vec<Member>,
    /// Canonical names of implemented interfaces.
    #[serde(default)]
    pub interfaces: Vec<String>,
}

impl ClassSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// First member with the given key and its position.
    pub fn find(&self, key: &MemberKey) -> Option<(usize, &Member)> {
        self.members
            .iter()
            .enumerate()
            .find(|(_, member)| &member.key() == key)
    }

    pub fn contains(&self, key: &MemberKey) -> bool {
        self.find(key).is_some()
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i == interface)
    }

    /// Field declarations, in order.
    pub fn declarations(&self) -> Vec<ExistingDeclaration> {
        self.members
            .iter()
            .filter_map(|member| match member {
                Member::Field(field) => Some(field.clone()),
                Member::Method(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_declarations() {
        let plain = GeneratedConstant::new("FIELD_AGE", "age");
        assert_eq!(
            plain.declaration(),
            "public static final String FIELD_AGE = \"age\";\n"
        );

        let table = GeneratedConstant::new("TABLE", "Person").with_comment("TODO: verify");
        assert_eq!(
            table.declaration(),
            "public static final String TABLE = \"Person\"; //TODO: verify\n"
        );
    }

    #[test]
    fn annotation_appends_to_existing_comment() {
        let table = GeneratedConstant::new("TABLE", "Person").with_comment("TODO: verify");
        assert_eq!(
            table.annotate("TODO: verify").comment.as_deref(),
            Some("TODO: verify; TODO: verify")
        );
        let field = GeneratedConstant::new("FIELD_AGE", "age");
        assert_eq!(field.annotate("check").comment.as_deref(), Some("check"));
    }

    #[test]
    fn quoted_and_bare_literals_match() {
        let constant = GeneratedConstant::new("FIELD_NAME", "name");
        assert!(constant.matches_literal("name"));
        assert!(constant.matches_literal("\"name\""));
        assert!(!constant.matches_literal("\"x\""));
    }

    #[test]
    fn snapshot_lookup_by_key() {
        let snapshot = ClassSnapshot::new()
            .with_member(Member::Field(
                ExistingDeclaration::new("FIELD_AGE").with_literal("\"age\""),
            ))
            .with_member(Member::Method(ExistingMethod::new(
                "writeToParcel",
                ["android.os.Parcel", "int"],
            )))
            .with_interface("android.os.Parcelable");

        assert_eq!(snapshot.find(&MemberKey::field("FIELD_AGE")).map(|(i, _)| i), Some(0));
        assert!(snapshot.contains(&MemberKey::method(
            "writeToParcel",
            ["android.os.Parcel", "int"]
        )));
        assert!(!snapshot.contains(&MemberKey::method("writeToParcel", ["android.os.Parcel"])));
        assert!(snapshot.implements("android.os.Parcelable"));
        assert_eq!(snapshot.declarations().len(), 1);
    }

    #[test]
    fn member_key_display() {
        assert_eq!(MemberKey::field("TABLE").to_string(), "TABLE");
        assert_eq!(
            MemberKey::method("writeToParcel", ["android.os.Parcel", "int"]).to_string(),
            "writeToParcel(android.os.Parcel,int)"
        );
        assert_eq!(
            MemberKey::method("describeContents", Vec::<String>::new()).to_string(),
            "describeContents()"
        );
    }

    #[test]
    fn snapshot_json_shape() {
        let json = r#"{
            "members": [
                { "kind": "field", "identifier": "TABLE", "literal": "\"Person\"" },
                { "kind": "method", "name": "describeContents" }
            ],
            "interfaces": []
        }"#;
        let snapshot: ClassSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.members.len(), 2);
        assert!(snapshot.contains(&MemberKey::method("describeContents", Vec::<String>::new())));
    }
}
