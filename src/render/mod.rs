//! Renderer module — one mapping table per generated file.
//!
//! [`render`] is shared by every output; the per-language [`Syntax`] decides
//! how keys, qualified values and entries are spelled.

pub mod cpp;
pub mod csv;
pub mod java;

use crate::model::PropertyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Cpp,
    Java,
}

/// Which property attribute becomes the mapped value, and in which language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    ChangeMode(Flavor),
    /// Only the first @access tag is used.
    AccessMode(Flavor),
    /// Java `List.of(...)` of the @data_enum classes. Properties without
    /// @data_enum are left out of the table.
    EnumTypes,
}

impl Table {
    pub fn flavor(self) -> Flavor {
        match self {
            Table::ChangeMode(flavor) | Table::AccessMode(flavor) => flavor,
            Table::EnumTypes => Flavor::Java,
        }
    }
}

/// Token-level spelling of a mapping table in one target language.
pub trait Syntax {
    /// Reference an enum constant, e.g. `VehicleProperty::INFO_VIN`.
    fn qualify(&self, enum_name: &str, constant: &str) -> String;
    /// One table entry, without the separating comma.
    fn entry(&self, key: &str, value: &str) -> String;
    /// Whether the last entry keeps its trailing comma.
    fn final_comma(&self) -> bool;
}

/// Create the syntax for the given flavor.
pub fn create_syntax(flavor: Flavor) -> Box<dyn Syntax> {
    match flavor {
        Flavor::Cpp => Box::new(cpp::CppSyntax),
        Flavor::Java => Box::new(java::JavaSyntax),
    }
}

/// Fixed boilerplate and parameters of one generated document.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// License notice and "do not edit" warning
    pub preamble: &'static str,
    /// Everything up to the first entry
    pub header: &'static str,
    /// Everything after the last entry
    pub footer: &'static str,
    pub table: Table,
}

const INDENT: &str = "        ";
const KEY_ENUM: &str = "VehicleProperty";
const CHANGE_MODE_ENUM: &str = "VehiclePropertyChangeMode";
const ACCESS_ENUM: &str = "VehiclePropertyAccess";

/// Render `configs` into a complete document described by `layout`.
///
/// The output depends only on the arguments, so rendering twice yields
/// identical bytes.
pub fn render(configs: &[PropertyConfig], layout: &Layout) -> String {
    let syntax = create_syntax(layout.table.flavor());

    let mut entries: Vec<String> = Vec::new();
    for config in configs {
        let value = match layout.table {
            Table::ChangeMode(_) => syntax.qualify(CHANGE_MODE_ENUM, config.change_mode()),
            Table::AccessMode(_) => syntax.qualify(ACCESS_ENUM, config.access_mode()),
            Table::EnumTypes => {
                if config.enum_types.is_empty() {
                    continue;
                }
                java::class_list(&config.enum_types)
            }
        };
        let key = syntax.qualify(KEY_ENUM, &config.name);
        entries.push(format!("{}{},", INDENT, syntax.entry(&key, &value)));
    }

    let mut body = String::from(layout.header);
    body.push_str(&entries.join("\n"));
    // Drops the final entry's comma, or the header's last newline when the
    // table is empty; committed files are laid out this way.
    if !syntax.final_comma() {
        body.pop();
    }

    let mut out = String::new();
    out.push_str(layout.preamble);
    out.push_str(&body);
    out.push_str(layout.footer);
    out
}
