//! Generated artifact sets.

use dbm_model::naming::{CREATE_TABLE_IDENTIFIER, FULL_PROJECTION_IDENTIFIER};
use dbm_model::{GeneratedConstant, MemberKey};
use serde::Serialize;

pub const CREATOR_IDENTIFIER: &str = "CREATOR";
pub const PARCEL_TYPE: &str = "android.os.Parcel";
pub const CURSOR_TYPE: &str = "android.database.Cursor";
pub const PARCELABLE_INTERFACE: &str = "android.os.Parcelable";

/// One generated class member and the key it is declared under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberArtifact {
    pub member: MemberKey,
    pub text: String,
}

impl MemberArtifact {
    pub fn new(member: MemberKey, text: String) -> Self {
        Self { member, text }
    }
}

/// Relational-schema artifacts. Derived from the type catalog only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaArtifacts {
    /// `TABLE` first, then one constant per field in field order.
    pub constants: Vec<GeneratedConstant>,
    pub full_projection: String,
    pub create_table: String,
    pub cursor_deserializer: String,
    pub content_values: String,
}

impl SchemaArtifacts {
    /// Non-constant members, in insertion order.
    pub fn members(&self) -> Vec<MemberArtifact> {
        vec![
            MemberArtifact::new(
                MemberKey::field(FULL_PROJECTION_IDENTIFIER),
                self.full_projection.clone(),
            ),
            MemberArtifact::new(
                MemberKey::field(CREATE_TABLE_IDENTIFIER),
                self.create_table.clone(),
            ),
            MemberArtifact::new(
                MemberKey::method("createFromCursor", [CURSOR_TYPE]),
                self.cursor_deserializer.clone(),
            ),
            MemberArtifact::new(
                MemberKey::method("getDbContentValues", Vec::<String>::new()),
                self.content_values.clone(),
            ),
        ]
    }
}

/// Parcelable implementation members. Regenerated as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParcelableArtifacts {
    pub class_name: String,
    pub describe_contents: String,
    pub write_to_parcel: String,
    /// Absent when the class already declares a constructor.
    pub default_constructor: Option<String>,
    pub parcel_constructor: String,
    pub creator: String,
}

impl ParcelableArtifacts {
    /// Members to append, in order.
    pub fn members(&self) -> Vec<MemberArtifact> {
        let mut members = vec![
            MemberArtifact::new(describe_contents_key(), self.describe_contents.clone()),
            MemberArtifact::new(write_to_parcel_key(), self.write_to_parcel.clone()),
        ];
        if let Some(default_constructor) = &self.default_constructor {
            members.push(MemberArtifact::new(
                MemberKey::method(&self.class_name, Vec::<String>::new()),
                default_constructor.clone(),
            ));
        }
        members.push(MemberArtifact::new(
            parcel_constructor_key(&self.class_name),
            self.parcel_constructor.clone(),
        ));
        members.push(MemberArtifact::new(
            MemberKey::field(CREATOR_IDENTIFIER),
            self.creator.clone(),
        ));
        members
    }

    /// Existing members removed before the fresh implementation is appended.
    pub fn replaced_members(&self) -> Vec<MemberKey> {
        vec![
            MemberKey::field(CREATOR_IDENTIFIER),
            parcel_constructor_key(&self.class_name),
            describe_contents_key(),
            write_to_parcel_key(),
        ]
    }
}

fn describe_contents_key() -> MemberKey {
    MemberKey::method("describeContents", Vec::<String>::new())
}

fn write_to_parcel_key() -> MemberKey {
    MemberKey::method("writeToParcel", [PARCEL_TYPE, "int"])
}

fn parcel_constructor_key(class_name: &str) -> MemberKey {
    MemberKey::method(class_name, [PARCEL_TYPE])
}

/// Everything generated for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    pub schema: SchemaArtifacts,
    pub parcelable: ParcelableArtifacts,
}
