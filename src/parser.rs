//! VehicleProperty.aidl annotation parser — line-by-line state machine.
//!
//! Only lines inside `enum VehicleProperty { ... };` are looked at. Each doc
//! comment opens a new in-progress [`PropertyConfig`]; tags inside the comment
//! fill it in, and the next `NAME = value` line seals it under `NAME`.

use crate::error::{Error, Result};
use crate::model::{PropertyConfig, Tag};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Placeholder constant at the top of the enum; never emitted.
const SENTINEL: &str = "INVALID";

// -- Regex patterns -----------------------------------------------------------

static RE_ENUM_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*enum VehicleProperty \{").unwrap());

static RE_ENUM_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\};").unwrap());

static RE_COMMENT_BEGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/\*\*?").unwrap());

static RE_COMMENT_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*/").unwrap());

static RE_CHANGE_MODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\* @change_mode (\S+)").unwrap());

static RE_ACCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\* @access (\S+)").unwrap());

static RE_DATA_ENUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\* @data_enum (\S+)").unwrap());

static RE_UNIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\* @unit (\S+)").unwrap());

static RE_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\w+)\s*=(.*)").unwrap());

// -- Parser state -------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside the enum block; lines are ignored.
    #[default]
    Outside,
    /// Inside the enum block, within a doc comment.
    InComment,
    /// Inside the enum block, between doc comments.
    InDeclarations,
}

#[derive(Default)]
struct ParserState {
    state: State,
    configs: Vec<PropertyConfig>,
    /// Record opened by the most recent doc comment
    current: Option<PropertyConfig>,
    /// Description accumulator, moved into `current` once sealed
    description: String,
}

// -- Public API ---------------------------------------------------------------

/// Parse the contents of VehicleProperty.aidl into property configs, in
/// declaration order.
///
/// Fails with [`Error::MissingAnnotation`] when a constant is reached whose
/// doc comment has no `@change_mode` or no `@access` tag.
pub fn parse(input: &str) -> Result<Vec<PropertyConfig>> {
    let mut state = ParserState::default();

    for line in input.lines() {
        process_line(&mut state, line)?;
    }

    Ok(state.configs)
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, line: &str) -> Result<()> {
    if RE_ENUM_START.is_match(line) {
        if s.state == State::Outside {
            s.state = State::InDeclarations;
        }
    } else if RE_ENUM_END.is_match(line) {
        s.state = State::Outside;
    }
    if s.state == State::Outside {
        return Ok(());
    }

    if RE_COMMENT_BEGIN.is_match(line) {
        s.state = State::InComment;
        s.current = Some(PropertyConfig::default());
        s.description.clear();
    }
    if RE_COMMENT_END.is_match(line) {
        s.state = State::InDeclarations;
    }

    match s.state {
        State::InComment => {
            process_comment_line(s, line);
            Ok(())
        }
        State::InDeclarations => process_declaration(s, line),
        State::Outside => Ok(()),
    }
}

/// Feed one doc comment line into the in-progress record.
fn process_comment_line(s: &mut ParserState, line: &str) {
    let Some(config) = s.current.as_mut() else {
        return;
    };

    if config.description.is_none() {
        // The opening `/**` line does not start with `*` and is skipped.
        if let Some(rest) = line.trim().strip_prefix('*') {
            let text = rest.trim();
            if text.is_empty() {
                if !s.description.is_empty() {
                    config.description = Some(std::mem::take(&mut s.description));
                }
            } else {
                if !s.description.is_empty() {
                    s.description.push(' ');
                }
                s.description.push_str(text);
            }
        }
    }

    if let Some(caps) = RE_CHANGE_MODE.captures(line) {
        config.change_mode = Some(strip_qualifier(&caps[1]).to_string());
    }
    if let Some(caps) = RE_ACCESS.captures(line) {
        config
            .access_modes
            .push(strip_qualifier(&caps[1]).to_string());
    }
    if let Some(caps) = RE_UNIT.captures(line) {
        config.unit_type = Some(caps[1].to_string());
    }
    if let Some(caps) = RE_DATA_ENUM.captures(line) {
        config.enum_types.push(caps[1].to_string());
    }
}

/// Seal the in-progress record when `line` declares a constant.
fn process_declaration(s: &mut ParserState, line: &str) -> Result<()> {
    let Some(caps) = RE_VALUE.captures(line) else {
        return Ok(());
    };
    let name = &caps[1];
    let config = s.current.take();
    if name == SENTINEL {
        return Ok(());
    }

    let mut config = config.unwrap_or_default();
    if config.change_mode.is_none() {
        return Err(missing(Tag::ChangeMode, name));
    }
    if config.access_modes.is_empty() {
        return Err(missing(Tag::Access, name));
    }
    config.name = name.to_string();
    debug!("parsed {config}");
    s.configs.push(config);
    Ok(())
}

// -- Helper functions ---------------------------------------------------------

/// `VehiclePropertyAccess.READ` → `READ`.
fn strip_qualifier(value: &str) -> &str {
    value.rsplit('.').next().unwrap_or(value)
}

fn missing(tag: Tag, property: &str) -> Error {
    Error::MissingAnnotation {
        tag,
        property: property.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"package android.hardware.automotive.vehicle;

@VintfStability
@Backing(type="int")
enum VehicleProperty {
    /**
     * Undefined property.
     */
    INVALID = 0x00000000,
    /**
     * VIN of vehicle
     *
     * @change_mode VehiclePropertyChangeMode.ON_CHANGE
     * @access VehiclePropertyAccess.READ
     */
    INFO_VIN = 0x0100 + 0x10000000 + 0x01000000
            + 0x00100000, // VehiclePropertyGroup:SYSTEM,VehicleArea:GLOBAL,VehiclePropertyType:STRING
};
"#;

    #[test]
    fn parse_single_property() {
        let configs = parse(MINIMAL).unwrap();
        assert_eq!(
            configs,
            vec![PropertyConfig {
                name: "INFO_VIN".to_string(),
                description: Some("VIN of vehicle".to_string()),
                change_mode: Some("ON_CHANGE".to_string()),
                access_modes: vec!["READ".to_string()],
                enum_types: Vec::new(),
                unit_type: None,
            }]
        );
    }

    #[test]
    fn parse_keeps_declaration_order() {
        let input = r#"enum VehicleProperty {
    /**
     * Second in name order.
     *
     * @change_mode VehiclePropertyChangeMode.STATIC
     * @access VehiclePropertyAccess.READ
     */
    ZULU = 2,
    /**
     * First in name order.
     *
     * @change_mode VehiclePropertyChangeMode.CONTINUOUS
     * @access VehiclePropertyAccess.READ_WRITE
     */
    ALPHA = 1,
};
"#;
        let names: Vec<_> = parse(input).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["ZULU", "ALPHA"]);
    }

    #[test]
    fn parse_ignores_lines_outside_enum() {
        let input = r#"/**
 * @change_mode VehiclePropertyChangeMode.STATIC
 * @access VehiclePropertyAccess.READ
 */
OUTSIDE = 1;
enum VehicleProperty {
};
AFTER = 2;
"#;
        assert!(parse(input).unwrap().is_empty());
    }

    #[test]
    fn parse_skips_sentinel_even_when_annotated() {
        let input = r#"enum VehicleProperty {
    /**
     * Placeholder.
     *
     * @change_mode VehiclePropertyChangeMode.STATIC
     * @access VehiclePropertyAccess.READ
     */
    INVALID = 0,
};
"#;
        assert!(parse(input).unwrap().is_empty());
    }

    #[test]
    fn parse_multiple_access_and_data_enums() {
        let input = r#"enum VehicleProperty {
    /**
     * Current gear.
     *
     * @change_mode VehiclePropertyChangeMode.ON_CHANGE
     * @access VehiclePropertyAccess.READ_WRITE
     * @access VehiclePropertyAccess.READ
     * @data_enum VehicleGear
     * @data_enum VehicleGearExtra
     * @unit VehicleUnit.MILLIMETER
     */
    GEAR_SELECTION = 0x0400,
};
"#;
        let configs = parse(input).unwrap();
        assert_eq!(configs.len(), 1);
        let gear = &configs[0];
        assert_eq!(gear.access_modes, ["READ_WRITE", "READ"]);
        assert_eq!(gear.access_mode(), "READ_WRITE");
        assert_eq!(gear.enum_types, ["VehicleGear", "VehicleGearExtra"]);
        assert_eq!(gear.unit_type.as_deref(), Some("VehicleUnit.MILLIMETER"));
    }

    #[test]
    fn parse_multiline_description() {
        let input = r#"enum VehicleProperty {
    /**
     * Speed of the vehicle.
     * Positive when moving "forward".
     *
     * Details that are not part of the description.
     *
     * @change_mode VehiclePropertyChangeMode.CONTINUOUS
     * @access VehiclePropertyAccess.READ
     */
    PERF_VEHICLE_SPEED = 0x0207,
};
"#;
        let configs = parse(input).unwrap();
        assert_eq!(
            configs[0].description.as_deref(),
            Some("Speed of the vehicle. Positive when moving \"forward\".")
        );
    }

    #[test]
    fn parse_missing_change_mode_names_property() {
        let input = r#"enum VehicleProperty {
    /**
     * No change mode.
     *
     * @access VehiclePropertyAccess.READ
     * @data_enum VehicleGear
     */
    BROKEN = 1,
};
"#;
        let err = parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAnnotation { tag: Tag::ChangeMode, ref property } if property == "BROKEN"
        ));
        assert_eq!(
            err.to_string(),
            "No change_mode annotation for property: BROKEN"
        );
    }

    #[test]
    fn parse_missing_access_names_property() {
        let input = r#"enum VehicleProperty {
    /**
     * No access.
     *
     * @change_mode VehiclePropertyChangeMode.STATIC
     * @unit VehicleUnit.KILOMETER
     */
    BROKEN = 1,
};
"#;
        let err = parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAnnotation { tag: Tag::Access, ref property } if property == "BROKEN"
        ));
        assert_eq!(
            err.to_string(),
            "No access_mode annotation for property: BROKEN"
        );
    }

    #[test]
    fn parse_constant_without_comment_fails() {
        let input = r#"enum VehicleProperty {
    /**
     * Annotated.
     *
     * @change_mode VehiclePropertyChangeMode.STATIC
     * @access VehiclePropertyAccess.READ
     */
    FIRST = 1,
    SECOND = 2,
};
"#;
        let err = parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAnnotation { ref property, .. } if property == "SECOND"
        ));
    }

    #[test]
    fn parse_description_absorbs_tags_before_blank_line() {
        let input = r#"enum VehicleProperty {
    /**
     * Current gear.
     * @change_mode VehiclePropertyChangeMode.ON_CHANGE
     * @access VehiclePropertyAccess.READ
     *
     */
    GEAR_SELECTION = 0x0400,
};
"#;
        let configs = parse(input).unwrap();
        assert_eq!(
            configs[0].description.as_deref(),
            Some(
                "Current gear. @change_mode VehiclePropertyChangeMode.ON_CHANGE \
                 @access VehiclePropertyAccess.READ"
            )
        );
        assert_eq!(configs[0].change_mode(), "ON_CHANGE");
        assert_eq!(configs[0].access_modes, ["READ"]);
    }

    #[test]
    fn parse_leading_blank_line_does_not_seal_description() {
        let input = r#"enum VehicleProperty {
    /**
     *
     * Fuel level.
     *
     * @change_mode VehiclePropertyChangeMode.CONTINUOUS
     * @access VehiclePropertyAccess.READ
     */
    FUEL_LEVEL = 0x0307,
};
"#;
        let configs = parse(input).unwrap();
        assert_eq!(configs[0].description.as_deref(), Some("Fuel level."));
    }

    #[test]
    fn parse_description_without_blank_line_stays_unset() {
        let input = r#"enum VehicleProperty {
    /**
     * Never sealed.
     * @change_mode VehiclePropertyChangeMode.STATIC
     * @access VehiclePropertyAccess.READ
     */
    FIRST = 1,
    /**
     *
     * Also never sealed.
     * @change_mode VehiclePropertyChangeMode.STATIC
     * @access VehiclePropertyAccess.READ
     */
    SECOND = 2,
};
"#;
        let descriptions: Vec<_> = parse(input)
            .unwrap()
            .into_iter()
            .map(|c| c.description)
            .collect();
        assert_eq!(descriptions.len(), 2);
        assert!(descriptions.iter().all(Option::is_none));
    }

    #[test]
    fn parse_sentinel_drops_pending_record() {
        let input = r#"enum VehicleProperty {
    /**
     * Placeholder.
     *
     * @change_mode VehiclePropertyChangeMode.STATIC
     * @access VehiclePropertyAccess.READ
     */
    INVALID = 0,
    AFTER_SENTINEL = 1,
};
"#;
        let err = parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAnnotation { tag: Tag::ChangeMode, ref property } if property == "AFTER_SENTINEL"
        ));
    }

    #[test]
    fn strip_qualifier_keeps_bare_names() {
        assert_eq!(strip_qualifier("VehiclePropertyAccess.READ"), "READ");
        assert_eq!(strip_qualifier("READ"), "READ");
    }
}
