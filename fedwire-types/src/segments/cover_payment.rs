//! Cover payment block segments (`{7033}`–`{7072}`), carried when a
//! Customer Transfer Plus rides a Swift cover (local instrument `COVS`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError};
use crate::party::CoverPayment;
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked};

/// Currency Instructed Amount `{7033}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CurrencyInstructedAmount {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::currency_instructed_amount"
        )
    )]
    pub tag: String,
    pub swift_field_tag: String,
    pub currency_code: String,
    /// Must begin with at least one digit and contain at most one decimal
    /// comma, e.g. `$1,234.56` goes on the wire as `1234,56`.
    pub amount: String,
}

impl CurrencyInstructedAmount {
    pub fn new() -> Self {
        Self {
            tag: Tag::CurrencyInstructedAmount.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::CurrencyInstructedAmount)?;
        checked(
            "SwiftFieldTag",
            &self.swift_field_tag,
            validators::alphanumeric,
        )?;
        if !self.currency_code.is_empty() {
            checked("CurrencyCode", &self.currency_code, validators::currency_code)?;
            checked("Amount", &self.amount, validators::amount)?;
        }
        Ok(())
    }
}

macro_rules! swift_lines_segment {
    (
        $(#[$doc:meta])* $name:ident, $variant:ident, $default:literal,
        lines = $lines:literal
    ) => {
        $(#[$doc])*
        #[cfg_attr(
            feature = "serde",
            derive(Serialize, Deserialize),
            serde(rename_all = "camelCase", default)
        )]
        #[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
        pub struct $name {
            #[cfg_attr(feature = "serde", serde(skip, default = $default))]
            pub tag: String,
            pub cover_payment: CoverPayment,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    tag: Tag::$variant.literal().into(),
                    ..Self::default()
                }
            }

            pub fn validate(&self) -> Result<(), FieldError> {
                self.field_inclusion()?;
                expect_tag(&self.tag, Tag::$variant)?;
                let cp = &self.cover_payment;
                checked("SwiftFieldTag", &cp.swift_field_tag, validators::alphanumeric)?;
                checked("SwiftLineOne", &cp.swift_line_one, validators::alphanumeric)?;
                checked("SwiftLineTwo", &cp.swift_line_two, validators::alphanumeric)?;
                checked("SwiftLineThree", &cp.swift_line_three, validators::alphanumeric)?;
                checked("SwiftLineFour", &cp.swift_line_four, validators::alphanumeric)?;
                if $lines >= 5 {
                    checked("SwiftLineFive", &cp.swift_line_five, validators::alphanumeric)?;
                }
                if $lines >= 6 {
                    checked("SwiftLineSix", &cp.swift_line_six, validators::alphanumeric)?;
                }
                Ok(())
            }

            fn field_inclusion(&self) -> Result<(), FieldError> {
                if $lines < 5 && !self.cover_payment.swift_line_five.is_empty() {
                    return Err(FieldError::new(
                        "SwiftLineFive",
                        ErrorKind::InvalidProperty,
                        &self.cover_payment.swift_line_five,
                    ));
                }
                if $lines < 6 && !self.cover_payment.swift_line_six.is_empty() {
                    return Err(FieldError::new(
                        "SwiftLineSix",
                        ErrorKind::InvalidProperty,
                        &self.cover_payment.swift_line_six,
                    ));
                }
                Ok(())
            }
        }
    };
}

swift_lines_segment! {
    /// Ordering Customer `{7050}`.
    OrderingCustomer, OrderingCustomer,
    "crate::segments::defaults::ordering_customer", lines = 5
}

swift_lines_segment! {
    /// Ordering Institution `{7052}`.
    OrderingInstitution, OrderingInstitution,
    "crate::segments::defaults::ordering_institution", lines = 5
}

swift_lines_segment! {
    /// Intermediary Institution `{7056}`.
    IntermediaryInstitution, IntermediaryInstitution,
    "crate::segments::defaults::intermediary_institution", lines = 5
}

swift_lines_segment! {
    /// Institution Account `{7057}`.
    InstitutionAccount, InstitutionAccount,
    "crate::segments::defaults::institution_account", lines = 5
}

swift_lines_segment! {
    /// Beneficiary Customer `{7059}`.
    BeneficiaryCustomer, BeneficiaryCustomer,
    "crate::segments::defaults::beneficiary_customer", lines = 5
}

swift_lines_segment! {
    /// Remittance `{7070}`. Lines five and six are forbidden here.
    Remittance, Remittance,
    "crate::segments::defaults::remittance", lines = 4
}

swift_lines_segment! {
    /// Sender to Receiver `{7072}`, the only cover segment carrying all
    /// six lines.
    SenderToReceiver, SenderToReceiver,
    "crate::segments::defaults::sender_to_receiver", lines = 6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_currency_instructed_amount() -> CurrencyInstructedAmount {
        let mut cia = CurrencyInstructedAmount::new();
        cia.swift_field_tag = "Swift Field Tag".into();
        cia.currency_code = "USD".into();
        cia.amount = "1500,49".into();
        cia
    }

    #[test]
    fn test_currency_instructed_amount() {
        assert!(mock_currency_instructed_amount().validate().is_ok());
    }

    #[test]
    fn test_currency_instructed_amount_bad_amount() {
        let mut cia = mock_currency_instructed_amount();
        cia.amount = "1-0".into();
        assert_eq!(
            cia.validate().unwrap_err(),
            FieldError::new("Amount", ErrorKind::NonAmount, "1-0")
        );
    }

    #[test]
    fn test_currency_instructed_amount_swift_field_tag() {
        let mut cia = mock_currency_instructed_amount();
        cia.swift_field_tag = "®".into();
        assert_eq!(
            cia.validate().unwrap_err(),
            FieldError::new("SwiftFieldTag", ErrorKind::NonAlphanumeric, "®")
        );
    }

    #[test]
    fn test_currency_instructed_amount_tag_override() {
        let mut cia = mock_currency_instructed_amount();
        cia.tag = "{9999}".into();
        assert_eq!(
            cia.validate().unwrap_err(),
            FieldError::new("tag", ErrorKind::ValidTagForType, "{9999}")
        );
    }

    #[test]
    fn test_line_six_forbidden_for_ordering_customer() {
        let mut oc = OrderingCustomer::new();
        oc.cover_payment.swift_line_one = "Line One".into();
        oc.cover_payment.swift_line_six = "Line Six".into();
        assert_eq!(
            oc.validate().unwrap_err(),
            FieldError::new("SwiftLineSix", ErrorKind::InvalidProperty, "Line Six")
        );
    }

    #[test]
    fn test_remittance_forbids_line_five() {
        let mut remittance = Remittance::new();
        remittance.cover_payment.swift_line_five = "Line Five".into();
        assert_eq!(
            remittance.validate().unwrap_err().field_name,
            "SwiftLineFive"
        );
    }

    #[test]
    fn test_sender_to_receiver_allows_all_lines() {
        let mut str_segment = SenderToReceiver::new();
        str_segment.cover_payment.swift_line_five = "Line Five".into();
        str_segment.cover_payment.swift_line_six = "Line Six".into();
        assert!(str_segment.validate().is_ok());
    }
}
