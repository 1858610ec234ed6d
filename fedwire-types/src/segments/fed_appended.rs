//! Segments the Fed appends on receipt.
//!
//! The Fed fills these in, so validation is limited to the tag constant.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::segments::expect_tag;
use crate::tag::Tag;

/// Message Disposition `{1100}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MessageDisposition {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::message_disposition")
    )]
    pub tag: String,
    /// `30` for the current FAIM format version.
    pub format_version: String,
    /// `T` (test) or `P` (production).
    pub test_production_code: String,
    /// Empty for an original message, `P` for a resend.
    pub message_duplication_code: String,
    pub message_status_indicator: String,
}

impl MessageDisposition {
    pub fn new() -> Self {
        Self {
            tag: Tag::MessageDisposition.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::MessageDisposition)
    }
}

/// Receipt Time Stamp `{1110}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReceiptTimeStamp {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::receipt_time_stamp")
    )]
    pub tag: String,
    /// `MMDD`.
    pub receipt_date: String,
    /// `HHMM`.
    pub receipt_time: String,
    pub receipt_application_identification: String,
}

impl ReceiptTimeStamp {
    pub fn new() -> Self {
        Self {
            tag: Tag::ReceiptTimeStamp.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::ReceiptTimeStamp)
    }
}

/// Output Message Accountability Data (OMAD) `{1120}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct OutputMessageAccountabilityData {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::output_message_accountability_data"
        )
    )]
    pub tag: String,
    /// `CCYYMMDD`.
    pub output_cycle_date: String,
    pub output_destination_id: String,
    pub output_sequence_number: String,
    /// `MMDD`.
    pub output_date: String,
    /// `HHMM`.
    pub output_time: String,
    pub output_frb_application_identification: String,
}

impl OutputMessageAccountabilityData {
    pub fn new() -> Self {
        Self {
            tag: Tag::OutputMessageAccountabilityData.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::OutputMessageAccountabilityData)
    }
}

/// Error Wire `{1130}`, attached by the Fed on reject flows.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ErrorWire {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::error_wire")
    )]
    pub tag: String,
    pub error_category: String,
    pub error_code: String,
    /// Free text; may itself contain tag-literal lookalikes such as
    /// `{1520}`.
    pub error_description: String,
}

impl ErrorWire {
    pub fn new() -> Self {
        Self {
            tag: Tag::ErrorWire.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::ErrorWire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_error_wire_tag_mismatch() {
        let mut ew = ErrorWire::new();
        ew.error_category = "E".into();
        ew.error_code = "XYZ".into();
        ew.error_description = "Data Error".into();
        assert!(ew.validate().is_ok());

        ew.tag = "{9999}".into();
        let err = ew.validate().unwrap_err();
        assert_eq!(err, FieldError::new("tag", ErrorKind::ValidTagForType, "{9999}"));
    }
}
