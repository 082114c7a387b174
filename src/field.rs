//! Tagged-field (ID + length + value) encoding.
//!
//! Every BR Code segment is rendered as a two-digit id, a two-digit
//! zero-padded length and the value itself. Templates nest by encoding a
//! sequence of fields and using the result as the value of a parent field.

use crate::error::{BrCodeError, Result};
use std::fmt;

/// Largest value length a two-digit length prefix can represent.
pub const MAX_VALUE_LEN: usize = 99;

/// A single `id + length + value` segment.
///
/// # Invariants
///
/// - `id` is exactly two ASCII digits
/// - `value` is at most [`MAX_VALUE_LEN`] characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedField {
    id: String,
    value: String,
}

impl TaggedField {
    /// Creates a field, rejecting malformed ids and over-long values.
    ///
    /// Length is counted in characters. Values longer than 99 characters are
    /// rejected rather than truncated, since a wrapped length prefix would
    /// corrupt every field that follows it.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.len() != 2 || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BrCodeError::InvalidFieldId(id));
        }

        let value = value.into();
        let len = value.chars().count();
        if len > MAX_VALUE_LEN {
            return Err(BrCodeError::FieldTooLong { id, len });
        }

        Ok(TaggedField { id, value })
    }

    /// Field id, e.g. `"59"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw field value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders `id ++ zero-padded length ++ value`.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TaggedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}{}", self.id, self.value.chars().count(), self.value)
    }
}

/// Encodes a single field in one call.
///
/// ```
/// use pix_brcode::field;
///
/// assert_eq!(field("58", "BR").unwrap(), "5802BR");
/// ```
pub fn field(id: &str, value: &str) -> Result<String> {
    TaggedField::new(id, value).map(|f| f.encode())
}

/// An ordered group of fields, used as the value of a parent field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    fields: Vec<TaggedField>,
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Template { fields: Vec::new() }
    }

    /// Appends a field, keeping insertion order.
    pub fn with(mut self, id: &str, value: &str) -> Result<Self> {
        self.fields.push(TaggedField::new(id, value)?);
        Ok(self)
    }

    /// Sub-fields in insertion order.
    pub fn fields(&self) -> &[TaggedField] {
        &self.fields
    }

    /// Concatenation of every encoded sub-field.
    pub fn encode(&self) -> String {
        self.fields.iter().map(TaggedField::encode).collect()
    }

    /// Wraps the encoded template as the value of field `id`.
    pub fn into_field(self, id: &str) -> Result<TaggedField> {
        TaggedField::new(id, self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_id_length_value() {
        assert_eq!(field("00", "01").unwrap(), "000201");
        assert_eq!(field("53", "986").unwrap(), "5303986");
        assert_eq!(field("00", "br.gov.bcb.pix").unwrap(), "0014br.gov.bcb.pix");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(field("05", "").unwrap(), "0500");
    }

    #[test]
    fn test_length_prefix_matches_value_for_all_lengths() {
        for len in 0..=MAX_VALUE_LEN {
            let value = "X".repeat(len);
            let encoded = field("62", &value).unwrap();
            assert_eq!(&encoded[..2], "62");
            assert_eq!(&encoded[2..4], format!("{:02}", len));
            assert_eq!(&encoded[4..], value);
        }
    }

    #[test]
    fn test_rejects_value_over_99_chars() {
        let value = "A".repeat(100);
        match TaggedField::new("59", value) {
            Err(BrCodeError::FieldTooLong { id, len }) => {
                assert_eq!(id, "59");
                assert_eq!(len, 100);
            }
            other => panic!("Expected FieldTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_length_counts_characters() {
        let f = TaggedField::new("01", "ação").unwrap();
        assert_eq!(f.encode(), "0104ação");
    }

    #[test]
    fn test_rejects_malformed_ids() {
        for id in ["", "1", "123", "a1", " 1", "١٢"] {
            assert!(
                matches!(TaggedField::new(id, "x"), Err(BrCodeError::InvalidFieldId(_))),
                "id {:?} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_template_nesting() {
        let template = Template::new()
            .with("00", "br.gov.bcb.pix")
            .unwrap()
            .with("01", "+5571997170057")
            .unwrap();
        assert_eq!(template.fields().len(), 2);

        let parent = template.into_field("26").unwrap();
        assert_eq!(
            parent.encode(),
            "26360014br.gov.bcb.pix0114+5571997170057"
        );
    }

    #[test]
    fn test_template_overflow_is_rejected_at_parent() {
        let template = Template::new()
            .with("00", &"A".repeat(60))
            .unwrap()
            .with("01", &"B".repeat(60))
            .unwrap();
        assert!(matches!(
            template.into_field("26"),
            Err(BrCodeError::FieldTooLong { len: 128, .. })
        ));
    }
}
