//! Serializer strategies.
//!
//! Each [`Strategy`] claims a family of declared types and emits the
//! `android.os.Parcel` statements that write a field in `writeToParcel` and
//! read it back in the parcel constructor. Emission depends only on the field
//! and its type, never on other fields or on emission order.
//!
//! Emitted text is one statement per line with no indentation; the parcel
//! variables are `dest`/`flags` on the write side and `in` on the read side.

use std::fmt;

use dbm_model::catalog::{STRING_TYPE, TIMESTAMP_TYPE, is_boxed};
use dbm_model::naming::temp_variable;
use dbm_model::{FieldSpec, TypeName};
use serde::{Deserialize, Serialize};

use crate::registry::TypeRegistry;

const BUNDLE_TYPE: &str = "android.os.Bundle";
const SPARSE_BOOLEAN_ARRAY_TYPE: &str = "android.util.SparseBooleanArray";
const LIST_TYPES: &[&str] = &["java.util.List", "java.util.ArrayList"];
const MAP_TYPES: &[&str] = &["java.util.Map", "java.util.HashMap"];
const WELL_KNOWN_SERIALIZABLE: &[&str] = &[
    "java.io.Serializable",
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.util.UUID",
    "java.util.Locale",
];

/// A serializer strategy. Variants are listed in default priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// `android.os.Bundle`, `java.util.Map` and `java.util.HashMap`.
    MapContainer,
    /// `java.util.Date` as epoch milliseconds, `-1` for null.
    Date,
    SparseBooleanArray,
    /// Registered enums as their ordinal, `-1` for null.
    Enumeration,
    /// Lists whose element type is a registered Parcelable.
    TypedListOfStructured,
    /// Primitives, `String` and boxed wrappers.
    Primitive,
    /// One-dimensional arrays of primitives or `String`.
    PrimitiveArray,
    /// Any other `List`/`ArrayList`.
    GenericList,
    /// Registered Parcelable types.
    StructuredObject,
    /// Registered and well-known `Serializable` types.
    GenericFallback,
}

impl Strategy {
    /// Default priority order: containers and specific matchers first,
    /// the serializable fallback last.
    pub const DEFAULT_ORDER: [Strategy; 10] = [
        Self::MapContainer,
        Self::Date,
        Self::SparseBooleanArray,
        Self::Enumeration,
        Self::TypedListOfStructured,
        Self::Primitive,
        Self::PrimitiveArray,
        Self::GenericList,
        Self::StructuredObject,
        Self::GenericFallback,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MapContainer => "Map container",
            Self::Date => "Date",
            Self::SparseBooleanArray => "Sparse boolean array",
            Self::Enumeration => "Enumeration",
            Self::TypedListOfStructured => "Typed Parcelable list",
            Self::Primitive => "Primitive",
            Self::PrimitiveArray => "Primitive array",
            Self::GenericList => "Generic list",
            Self::StructuredObject => "Parcelable object",
            Self::GenericFallback => "Serializable fallback",
        }
    }

    /// Short description of the claimed types.
    pub fn claimed_types(&self) -> &'static str {
        match self {
            Self::MapContainer => "android.os.Bundle, java.util.Map<K,V>, java.util.HashMap<K,V>",
            Self::Date => "java.util.Date",
            Self::SparseBooleanArray => "android.util.SparseBooleanArray",
            Self::Enumeration => "registered enums",
            Self::TypedListOfStructured => "List/ArrayList of registered Parcelable types",
            Self::Primitive => "primitives, java.lang.String, boxed java.lang wrappers",
            Self::PrimitiveArray => "boolean[] byte[] char[] double[] float[] int[] long[] String[]",
            Self::GenericList => "any other List/ArrayList",
            Self::StructuredObject => "android.os.Parcelable and registered Parcelable types",
            Self::GenericFallback => {
                "registered Serializable types, Serializable, BigDecimal, BigInteger, UUID, Locale"
            }
        }
    }

    /// True when this strategy handles `ty`.
    pub fn claims(&self, ty: &TypeName, registry: &TypeRegistry) -> bool {
        match self {
            Self::MapContainer => ty.is(BUNDLE_TYPE) || ty.is_one_of(MAP_TYPES),
            Self::Date => ty.is(TIMESTAMP_TYPE),
            Self::SparseBooleanArray => ty.is(SPARSE_BOOLEAN_ARRAY_TYPE),
            Self::Enumeration => registry.is_enum(ty),
            Self::TypedListOfStructured => {
                ty.is_one_of(LIST_TYPES)
                    && ty
                        .argument(0)
                        .is_some_and(|element| registry.is_structured(element))
            }
            Self::Primitive => primitive_codec(ty).is_some(),
            Self::PrimitiveArray => array_suffix(ty).is_some(),
            Self::GenericList => ty.is_one_of(LIST_TYPES),
            Self::StructuredObject => registry.is_structured(ty),
            Self::GenericFallback => {
                registry.is_serializable(ty) || ty.is_one_of(WELL_KNOWN_SERIALIZABLE)
            }
        }
    }

    /// Statements writing `field` to `dest`.
    pub fn emit_write(&self, field: &FieldSpec, ty: &TypeName) -> String {
        let name = &field.name;
        match self {
            Self::MapContainer if ty.is(BUNDLE_TYPE) => format!("dest.writeBundle(this.{name});"),
            Self::MapContainer => format!("dest.writeMap(this.{name});"),
            Self::Date => {
                format!("dest.writeLong(this.{name} != null ? this.{name}.getTime() : -1);")
            }
            Self::SparseBooleanArray => format!("dest.writeSparseBooleanArray(this.{name});"),
            Self::Enumeration => {
                format!("dest.writeInt(this.{name} == null ? -1 : this.{name}.ordinal());")
            }
            Self::TypedListOfStructured => format!("dest.writeTypedList(this.{name});"),
            Self::Primitive => match primitive_codec(ty) {
                Some(PrimitiveCodec::Direct(suffix)) => format!("dest.write{suffix}(this.{name});"),
                Some(PrimitiveCodec::Boolean) => {
                    format!("dest.writeByte(this.{name} ? (byte) 1 : (byte) 0);")
                }
                Some(PrimitiveCodec::Widened(_)) => format!("dest.writeInt(this.{name});"),
                Some(PrimitiveCodec::Boxed) | None => format!("dest.writeValue(this.{name});"),
            },
            Self::PrimitiveArray => {
                let suffix = array_suffix(ty).unwrap_or("Value");
                format!("dest.write{suffix}Array(this.{name});")
            }
            Self::GenericList => format!("dest.writeList(this.{name});"),
            Self::StructuredObject => format!("dest.writeParcelable(this.{name}, flags);"),
            Self::GenericFallback => format!("dest.writeSerializable(this.{name});"),
        }
    }

    /// Statements reading `field` back from `in`.
    pub fn emit_read(&self, field: &FieldSpec, ty: &TypeName) -> String {
        let name = &field.name;
        match self {
            Self::MapContainer if ty.is(BUNDLE_TYPE) => format!("this.{name} = in.readBundle();"),
            Self::MapContainer => {
                let key = ty.argument(0).cloned().unwrap_or_else(object_type);
                let value = ty.argument(1).cloned().unwrap_or_else(object_type);
                format!(
                    "this.{name} = new java.util.HashMap<{key},{value}>();\n\
                     in.readMap(this.{name}, {}.class.getClassLoader());",
                    value.erasure()
                )
            }
            Self::Date => {
                let tmp = temp_variable(name);
                format!(
                    "long {tmp} = in.readLong();\n\
                     this.{name} = {tmp} == -1 ? null : new java.util.Date({tmp});"
                )
            }
            Self::SparseBooleanArray => format!("this.{name} = in.readSparseBooleanArray();"),
            Self::Enumeration => {
                let tmp = temp_variable(name);
                format!(
                    "int {tmp} = in.readInt();\n\
                     this.{name} = {tmp} == -1 ? null : {}.values()[{tmp}];",
                    ty.base()
                )
            }
            Self::TypedListOfStructured => {
                let element = ty.element_or_object();
                format!(
                    "this.{name} = in.createTypedArrayList({}.CREATOR);",
                    element.base()
                )
            }
            Self::Primitive => match primitive_codec(ty) {
                Some(PrimitiveCodec::Direct(suffix)) => format!("this.{name} = in.read{suffix}();"),
                Some(PrimitiveCodec::Boolean) => format!("this.{name} = in.readByte() != 0;"),
                Some(PrimitiveCodec::Widened(cast)) => {
                    format!("this.{name} = ({cast}) in.readInt();")
                }
                Some(PrimitiveCodec::Boxed) | None => format!(
                    "this.{name} = ({ty}) in.readValue({}.class.getClassLoader());",
                    ty.erasure()
                ),
            },
            Self::PrimitiveArray => {
                let suffix = array_suffix(ty).unwrap_or("Value");
                format!("this.{name} = in.create{suffix}Array();")
            }
            Self::GenericList => {
                let element = ty.element_or_object();
                format!(
                    "this.{name} = new java.util.ArrayList<{element}>();\n\
                     in.readList(this.{name}, {}.class.getClassLoader());",
                    element.erasure()
                )
            }
            Self::StructuredObject => format!(
                "this.{name} = in.readParcelable({}.class.getClassLoader());",
                ty.erasure()
            ),
            Self::GenericFallback => format!("this.{name} = ({ty}) in.readSerializable();"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

enum PrimitiveCodec {
    /// `writeX`/`readX` pair with the given suffix.
    Direct(&'static str),
    /// Stored as a byte, 1 or 0.
    Boolean,
    /// Stored as an int and cast back on read.
    Widened(&'static str),
    /// `writeValue`/`readValue`.
    Boxed,
}

fn primitive_codec(ty: &TypeName) -> Option<PrimitiveCodec> {
    if ty.is_array() || !ty.arguments().is_empty() {
        return None;
    }
    let codec = match ty.base() {
        "byte" => PrimitiveCodec::Direct("Byte"),
        "double" => PrimitiveCodec::Direct("Double"),
        "float" => PrimitiveCodec::Direct("Float"),
        "int" => PrimitiveCodec::Direct("Int"),
        "long" => PrimitiveCodec::Direct("Long"),
        STRING_TYPE => PrimitiveCodec::Direct("String"),
        "boolean" => PrimitiveCodec::Boolean,
        "char" => PrimitiveCodec::Widened("char"),
        "short" => PrimitiveCodec::Widened("short"),
        other if is_boxed(other) => PrimitiveCodec::Boxed,
        _ => return None,
    };
    Some(codec)
}

/// `Parcel` method infix for a supported one-dimensional array.
fn array_suffix(ty: &TypeName) -> Option<&'static str> {
    if ty.array_depth() != 1 || !ty.arguments().is_empty() {
        return None;
    }
    let suffix = match ty.base() {
        "boolean" => "Boolean",
        "byte" => "Byte",
        "char" => "Char",
        "double" => "Double",
        "float" => "Float",
        "int" => "Int",
        "long" => "Long",
        STRING_TYPE => "String",
        _ => return None,
    };
    Some(suffix)
}

fn object_type() -> TypeName {
    TypeName::simple(dbm_model::types::OBJECT_TYPE)
}
