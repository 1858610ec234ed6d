//! Error-related types.
//!
//! Every field-level failure wraps into a [`FieldError`] carrying the field
//! name, the offending value, and the root [`ErrorKind`]. Message-level
//! validation additionally produces the compound kinds of
//! [`ValidationError`]. All errors expose an unwrap chain via
//! [`std::error::Error::source`].

use thiserror::Error;

/// The root cause of a field-level validation failure.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("is an invalid tag")]
    ValidTagForType,
    #[error("has non numeric characters")]
    NonNumeric,
    #[error("has non alphanumeric characters")]
    NonAlphanumeric,
    #[error("is an incorrect amount format")]
    NonAmount,
    #[error("is not a recognized currency code")]
    NonCurrencyCode,
    #[error("is not uppercase A-Z or 0-9")]
    UpperAlpha,
    #[error("is a required field")]
    FieldRequired,
    #[error("is an invalid property")]
    InvalidProperty,
    #[error("is not permitted in this context")]
    NotPermitted,
    #[error("is an invalid date format")]
    ValidDate,
    #[error("is an invalid month")]
    ValidMonth,
    #[error("is an invalid day")]
    ValidDay,
    #[error("is an invalid year")]
    ValidYear,
    #[error("is an invalid century")]
    ValidCentury,
    #[error("is not 30")]
    FormatVersion,
    #[error("is an invalid test production code")]
    TestProductionCode,
    #[error("is an invalid message duplication code")]
    MessageDuplicationCode,
    #[error("is an invalid type code")]
    TypeCode,
    #[error("is an invalid sub type code")]
    SubTypeCode,
    #[error("is an invalid business function code")]
    BusinessFunctionCode,
    #[error("is an invalid transaction type code")]
    TransactionTypeCode,
    #[error("is only permitted for business function code CTP")]
    LocalInstrumentNotPermitted,
    #[error("is an invalid local instrument code")]
    LocalInstrumentCode,
    #[error("is an invalid payment notification indicator")]
    PaymentNotificationIndicator,
    #[error("is an invalid charge detail")]
    ChargeDetails,
    #[error("is an invalid identification code")]
    IdentificationCode,
    #[error("is an invalid advice code")]
    AdviceCode,
    #[error("is an invalid remittance location method")]
    RemittanceLocationMethod,
    #[error("is an invalid address type")]
    AddressType,
    #[error("is an invalid remittance identification type")]
    IdentificationType,
    #[error("is an invalid organization identification code")]
    OrganizationIdentificationCode,
    #[error("is an invalid private identification code")]
    PrivateIdentificationCode,
    #[error("is an invalid document type code")]
    DocumentTypeCode,
    #[error("is an invalid credit or debit indicator")]
    CreditDebitIndicator,
    #[error("is an invalid adjustment reason code")]
    AdjustmentReasonCode,
    #[error("is an invalid party identifier")]
    PartyIdentifier,
    #[error("is an invalid line for originator option F")]
    OptionFLine,
    #[error("is an invalid name for originator option F")]
    OptionFName,
    #[error("is an invalid payment method")]
    PaymentMethod,
}

/// A validation failure at a single field of a tag segment.
///
/// The `Display` form reads `"<field> <value> <cause>"`, e.g.
/// `"Amount 00000Z001500,49 is an incorrect amount format"`.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("{field_name} {value} {kind}")]
pub struct FieldError {
    /// Name of the field the error happened at.
    pub field_name: &'static str,
    /// The value that caused the error.
    pub value: String,
    /// The root cause.
    #[source]
    pub kind: ErrorKind,
}

impl FieldError {
    pub fn new(field_name: &'static str, kind: ErrorKind, value: impl Into<String>) -> Self {
        Self {
            field_name,
            value: value.into(),
            kind,
        }
    }

    /// Shorthand for a missing mandatory field.
    pub fn required(field_name: &'static str) -> Self {
        Self::new(field_name, ErrorKind::FieldRequired, "")
    }

    /// Shorthand for a field that may not appear in its current context.
    pub fn not_permitted(field_name: &'static str, value: impl Into<String>) -> Self {
        Self::new(field_name, ErrorKind::NotPermitted, value)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// A message-level validation failure.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A segment (or the message composition itself) failed a field rule.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A property value is not valid for the message's business function
    /// code.
    #[error("{property}: {property_value} is not valid for {business_function_code}")]
    BusinessFunctionCodeProperty {
        property: &'static str,
        property_value: String,
        business_function_code: String,
    },

    /// A property value is not valid in combination with a second
    /// property's value.
    #[error("{property}: {property_value} is not valid for {second_property}: {second_property_value}")]
    InvalidPropertyForProperty {
        property: &'static str,
        property_value: String,
        second_property: &'static str,
        second_property_value: String,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("Amount", ErrorKind::NonAmount, "00000Z001500,49");
        assert_eq!(
            err.to_string(),
            "Amount 00000Z001500,49 is an incorrect amount format"
        );
    }

    #[test]
    fn test_field_error_unwraps_to_kind() {
        let err = FieldError::new("Name", ErrorKind::NonAlphanumeric, "®");
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            ErrorKind::NonAlphanumeric.to_string()
        );
    }

    #[test]
    fn test_validation_error_from_field_error() {
        let err = ValidationError::from(FieldError::required("SenderSupplied"));
        assert_eq!(err.to_string(), "SenderSupplied  is a required field");
    }
}
