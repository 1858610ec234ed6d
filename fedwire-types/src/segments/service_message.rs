//! Service Message `{9000}`, used for reject and return flows.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked};

/// Service Message `{9000}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ServiceMessage {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::service_message")
    )]
    pub tag: String,
    /// Required whenever the segment appears.
    pub line_one: String,
    pub line_two: String,
    pub line_three: String,
    pub line_four: String,
    pub line_five: String,
    pub line_six: String,
    pub line_seven: String,
    pub line_eight: String,
    pub line_nine: String,
    pub line_ten: String,
    pub line_eleven: String,
    pub line_twelve: String,
}

impl ServiceMessage {
    pub fn new() -> Self {
        Self {
            tag: Tag::ServiceMessage.literal().into(),
            ..Self::default()
        }
    }

    fn lines(&self) -> [(&'static str, &str); 12] {
        [
            ("LineOne", &self.line_one),
            ("LineTwo", &self.line_two),
            ("LineThree", &self.line_three),
            ("LineFour", &self.line_four),
            ("LineFive", &self.line_five),
            ("LineSix", &self.line_six),
            ("LineSeven", &self.line_seven),
            ("LineEight", &self.line_eight),
            ("LineNine", &self.line_nine),
            ("LineTen", &self.line_ten),
            ("LineEleven", &self.line_eleven),
            ("LineTwelve", &self.line_twelve),
        ]
    }

    /// Joins the populated lines with `sep` for human-readable display.
    pub fn full_text(&self, sep: &str) -> String {
        self.lines()
            .iter()
            .map(|(_, line)| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(sep)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::ServiceMessage)?;
        for (field, line) in self.lines() {
            checked(field, line, validators::alphanumeric)?;
        }
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.line_one.is_empty() {
            return Err(FieldError::required("LineOne"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_line_one_required() {
        let mut sm = ServiceMessage::new();
        assert_eq!(sm.validate().unwrap_err(), FieldError::required("LineOne"));

        sm.line_one = "Sender ABA 123456789".into();
        assert!(sm.validate().is_ok());
    }

    #[test]
    fn test_lines_alphanumeric() {
        let mut sm = ServiceMessage::new();
        sm.line_one = "Line One".into();
        sm.line_nine = "®".into();
        let err = sm.validate().unwrap_err();
        assert_eq!(err, FieldError::new("LineNine", ErrorKind::NonAlphanumeric, "®"));
    }

    #[test]
    fn test_full_text() {
        let mut sm = ServiceMessage::new();
        sm.line_one = "First".into();
        sm.line_three = "Third".into();
        assert_eq!(sm.full_text(" / "), "First / Third");
    }
}
