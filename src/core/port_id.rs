use log::debug;

use super::direction::PortDirection;
use super::errors::MalformedInputError;

/// Separator between the parent, direction, and name segments of a port
/// identifier.
pub const SEPARATOR: char = '-';

/// Build the identifier for a port on a parent node.
///
/// The result is always `<parent>-<direction>-<name>`, byte-for-byte. The
/// inputs are reflected as-is: nothing is trimmed, validated, or escaped,
/// so a parent or name that itself contains `-` produces a well-formed but
/// possibly ambiguous identifier. Use [`checked_port_id`] when the caller
/// needs that ruled out.
pub fn create_port_id(parent: &str, name: &str, direction: PortDirection) -> String {
    format!(
        "{}{}{}{}{}",
        parent,
        SEPARATOR,
        direction.as_str(),
        SEPARATOR,
        name
    )
}

/// Build a port identifier, rejecting inputs that would make it ambiguous.
///
/// Accepts exactly the triples for which the identifier can be split back
/// into its three segments unambiguously: `parent` and `name` must be
/// non-empty and must not contain the separator character. On success the
/// result is identical to [`create_port_id`] on the same inputs.
pub fn checked_port_id(
    parent: &str,
    name: &str,
    direction: PortDirection,
) -> Result<String, MalformedInputError> {
    validate_segment("parent", parent)?;
    validate_segment("name", name)?;
    Ok(create_port_id(parent, name, direction))
}

fn validate_segment(segment: &'static str, value: &str) -> Result<(), MalformedInputError> {
    if value.is_empty() {
        debug!("Rejected port id: empty {} segment", segment);
        return Err(MalformedInputError::EmptySegment(segment));
    }
    if value.contains(SEPARATOR) {
        debug!("Rejected port id: separator in {} '{}'", segment, value);
        return Err(MalformedInputError::SeparatorInSegment {
            segment,
            value: value.to_string(),
        });
    }
    Ok(())
}
