//! Type mapping between schema field types and storage column types.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

/// Declared type of a model field.
///
/// Only `number` has a mapping of its own. Any other declared type degrades
/// to the `string` mapping instead of failing generation; the raw name is
/// kept in [`FieldType::Unknown`] so it can still be reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldType {
    Number,
    #[default]
    String,
    Unknown(String),
}

impl FieldType {
    /// Parse a declared type name. Never fails.
    pub fn parse(name: &str) -> Self {
        match name {
            "number" => Self::Number,
            "string" => Self::String,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The type name as declared in the schema.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Unknown(name) => name,
        }
    }

    /// Returns false for types that fall back to the `string` mapping.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts any value. Non-string values become [`FieldType::Unknown`] named
/// after the value (`true`, `null`, `5`, `array`, `object`).
impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldTypeVisitor)
    }
}

struct FieldTypeVisitor;

impl<'de> Visitor<'de> for FieldTypeVisitor {
    type Value = FieldType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a field type name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldType, E> {
        Ok(FieldType::parse(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldType, E> {
        Ok(FieldType::Unknown(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldType, E> {
        Ok(FieldType::Unknown(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldType, E> {
        Ok(FieldType::Unknown(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldType, E> {
        Ok(FieldType::Unknown(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldType, E> {
        Ok(FieldType::Unknown("null".to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldType, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FieldType, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FieldType, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(FieldType::Unknown("array".to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FieldType, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(FieldType::Unknown("object".to_string()))
    }
}

/// Storage column type of a generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for mapping declared field types to a storage dialect.
pub trait TypeMapper {
    /// The SQL dialect name
    fn dialect(&self) -> &'static str;

    /// Map a declared field type to a column type
    fn map_field_type(&self, field_type: &FieldType) -> ColumnType;
}

/// SQLite type mapper: `number` is INTEGER, everything else is TEXT.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteTypeMapper;

impl TypeMapper for SqliteTypeMapper {
    fn dialect(&self) -> &'static str {
        "sqlite"
    }

    fn map_field_type(&self, field_type: &FieldType) -> ColumnType {
        match field_type {
            FieldType::Number => ColumnType::Integer,
            FieldType::String | FieldType::Unknown(_) => ColumnType::Text,
        }
    }
}
