//! CSV export of every parsed field, used for documentation tooling.

use crate::error::{Error, Result};
use crate::model::{PropertyConfig, Tag};

const HEADER: &str = "name,description,change mode,access mode,enum type,unit type\n";

/// Stands in for an empty enum type list or a missing unit.
const PLACEHOLDER: &str = "/";

/// Render one quoted row per property. Unlike the code tables, all access
/// modes are listed.
pub fn render(configs: &[PropertyConfig]) -> Result<String> {
    let mut out = String::from(HEADER);
    for config in configs {
        let description = config
            .description
            .as_deref()
            .ok_or_else(|| Error::MissingAnnotation {
                tag: Tag::Description,
                property: config.name.clone(),
            })?;
        let enum_types = if config.enum_types.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            config.enum_types.join("/")
        };
        let fields: [&str; 6] = [
            config.name.as_str(),
            &csv_escape(description),
            config.change_mode(),
            &config.access_modes.join("/"),
            &enum_types,
            config.unit_type.as_deref().unwrap_or(PLACEHOLDER),
        ];
        let row: Vec<String> = fields.iter().map(|f| format!("\"{}\"", f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    Ok(out)
}

fn csv_escape(s: &str) -> String {
    s.replace('"', "\"\"")
}
