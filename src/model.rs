//! Data model for parsed property annotations — format-agnostic.

use std::fmt;

/// One annotated constant from the `VehicleProperty` enum.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyConfig {
    pub name: String,
    /// Leading free-text lines of the doc comment, joined with spaces
    pub description: Option<String>,
    /// @change_mode, qualifier stripped
    pub change_mode: Option<String>,
    /// @access entries in declaration order, qualifier stripped.
    /// Code generation only uses the first one.
    pub access_modes: Vec<String>,
    /// @data_enum entries (raw type names)
    pub enum_types: Vec<String>,
    /// @unit (raw text)
    pub unit_type: Option<String>,
}

impl PropertyConfig {
    /// Change mode of a sealed record. Sealing guarantees it is present.
    pub fn change_mode(&self) -> &str {
        self.change_mode.as_deref().unwrap_or_default()
    }

    /// First access mode of a sealed record.
    pub fn access_mode(&self) -> &str {
        self.access_modes.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for PropertyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PropertyConfig{{name: {}, description: {:?}, change_mode: {:?}, \
             access_modes: {:?}, enum_types: {:?}, unit_type: {:?}}}",
            self.name,
            self.description,
            self.change_mode,
            self.access_modes,
            self.enum_types,
            self.unit_type
        )
    }
}

/// Annotations a property must carry at the point they are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    ChangeMode,
    /// The `@access` tag; reported as `access_mode` in messages.
    Access,
    Description,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::ChangeMode => "change_mode",
            Tag::Access => "access_mode",
            Tag::Description => "description",
        })
    }
}
