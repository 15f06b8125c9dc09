//! Partner identifier validation.
//!
//! The Partner API issues partner identifiers as version 4 UUIDs in their
//! canonical hyphenated form. The check mirrors the server's expectations:
//!
//! - exactly 36 characters laid out as 8-4-4-4-12 hexadecimal groups
//! - version nibble fixed to `4`
//! - variant nibble in `{8, 9, a, b}` (RFC 4122)
//! - hexadecimal digits are matched case-insensitively

use uuid::{Uuid, Variant};

/// Length of a hyphenated UUID string.
const HYPHENATED_LEN: usize = 36;

/// Byte offsets of the hyphens in a hyphenated UUID string.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Validates a partner identifier as a hyphenated UUID v4.
///
/// # Examples
///
/// ```
/// use mobihealth_partner::is_valid_uuid_v4;
///
/// assert!(is_valid_uuid_v4("123e4567-e89b-42d3-a456-426614174000"));
/// assert!(is_valid_uuid_v4("123E4567-E89B-42D3-A456-426614174000"));
/// assert!(!is_valid_uuid_v4("123e4567-e89b-12d3-a456-426614174000")); // v1
/// assert!(!is_valid_uuid_v4("123e4567e89b42d3a456426614174000"));     // simple form
/// ```
#[must_use]
pub fn is_valid_uuid_v4(value: &str) -> bool {
    if value.len() != HYPHENATED_LEN || !has_canonical_hyphens(value) {
        return false;
    }
    Uuid::try_parse(value)
        .is_ok_and(|uuid| uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122)
}

fn has_canonical_hyphens(value: &str) -> bool {
    value.char_indices().all(|(index, ch)| {
        if HYPHEN_POSITIONS.contains(&index) {
            ch == '-'
        } else {
            ch.is_ascii_hexdigit()
        }
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for partner identifier validation.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("123e4567-e89b-42d3-a456-426614174000")]
    #[case("123e4567-e89b-42d3-8456-426614174000")]
    #[case("123e4567-e89b-42d3-9456-426614174000")]
    #[case("123e4567-e89b-42d3-b456-426614174000")]
    #[case("123E4567-E89B-42D3-A456-426614174000")]
    fn accepts_canonical_v4_identifiers(#[case] value: &str) {
        assert!(is_valid_uuid_v4(value), "{value} should be accepted");
    }

    #[rstest]
    #[case::empty("")]
    #[case::version_one("123e4567-e89b-12d3-a456-426614174000")]
    #[case::version_five("123e4567-e89b-52d3-a456-426614174000")]
    #[case::ncs_variant("123e4567-e89b-42d3-7456-426614174000")]
    #[case::microsoft_variant("123e4567-e89b-42d3-c456-426614174000")]
    #[case::simple_form("123e4567e89b42d3a456426614174000")]
    #[case::braced_form("{123e4567-e89b-42d3-a456-426614174000}")]
    #[case::urn_form("urn:uuid:123e4567-e89b-42d3-a456-426614174000")]
    #[case::misplaced_hyphen("123e456-7e89b-42d3-a456-426614174000")]
    #[case::non_hex("123e4567-e89b-42d3-a456-42661417400g")]
    #[case::trailing_space("123e4567-e89b-42d3-a456-42661417400 ")]
    #[case::not_a_uuid("your-partner-uuid")]
    fn rejects_other_shapes(#[case] value: &str) {
        assert!(!is_valid_uuid_v4(value), "{value:?} should be rejected");
    }

    #[test]
    fn accepts_generated_identifiers() {
        let generated = Uuid::new_v4().hyphenated().to_string();
        assert!(is_valid_uuid_v4(&generated));
    }
}
