//! FI-to-FI information block segments (`{6100}`–`{6500}`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError};
use crate::party::{AdditionalFiToFi, Advice, FiToFi};
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked};

fn validate_fi_to_fi(fi_to_fi: &FiToFi) -> Result<(), FieldError> {
    checked("LineOne", &fi_to_fi.line_one, validators::alphanumeric)?;
    checked("LineTwo", &fi_to_fi.line_two, validators::alphanumeric)?;
    checked("LineThree", &fi_to_fi.line_three, validators::alphanumeric)?;
    checked("LineFour", &fi_to_fi.line_four, validators::alphanumeric)?;
    checked("LineFive", &fi_to_fi.line_five, validators::alphanumeric)?;
    checked("LineSix", &fi_to_fi.line_six, validators::alphanumeric)?;
    Ok(())
}

fn validate_advice(advice: &Advice) -> Result<(), FieldError> {
    checked("AdviceCode", &advice.advice_code, validators::advice_code)?;
    checked("LineOne", &advice.line_one, validators::alphanumeric)?;
    checked("LineTwo", &advice.line_two, validators::alphanumeric)?;
    checked("LineThree", &advice.line_three, validators::alphanumeric)?;
    checked("LineFour", &advice.line_four, validators::alphanumeric)?;
    checked("LineFive", &advice.line_five, validators::alphanumeric)?;
    checked("LineSix", &advice.line_six, validators::alphanumeric)?;
    Ok(())
}

macro_rules! fi_lines_segment {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $default:literal) => {
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
            pub fi_to_fi: FiToFi,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    tag: Tag::$variant.literal().into(),
                    ..Self::default()
                }
            }

            pub fn validate(&self) -> Result<(), FieldError> {
                expect_tag(&self.tag, Tag::$variant)?;
                validate_fi_to_fi(&self.fi_to_fi)
            }
        }
    };
}

macro_rules! fi_advice_segment {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $default:literal) => {
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
            pub advice: Advice,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    tag: Tag::$variant.literal().into(),
                    ..Self::default()
                }
            }

            pub fn validate(&self) -> Result<(), FieldError> {
                expect_tag(&self.tag, Tag::$variant)?;
                validate_advice(&self.advice)
            }
        }
    };
}

fi_lines_segment! {
    /// Receiver FI Information `{6100}`.
    FIReceiverFI, FIReceiverFI, "crate::segments::defaults::fi_receiver_fi"
}

fi_advice_segment! {
    /// Drawdown Debit Account Advice Information `{6110}`.
    FIDrawdownDebitAccountAdvice, FIDrawdownDebitAccountAdvice,
    "crate::segments::defaults::fi_drawdown_debit_account_advice"
}

fi_lines_segment! {
    /// Intermediary FI Information `{6200}`.
    FIIntermediaryFI, FIIntermediaryFI, "crate::segments::defaults::fi_intermediary_fi"
}

fi_advice_segment! {
    /// Intermediary FI Advice Information `{6210}`.
    FIIntermediaryFIAdvice, FIIntermediaryFIAdvice,
    "crate::segments::defaults::fi_intermediary_fi_advice"
}

fi_lines_segment! {
    /// Beneficiary FI Information `{6300}`.
    FIBeneficiaryFI, FIBeneficiaryFI, "crate::segments::defaults::fi_beneficiary_fi"
}

fi_advice_segment! {
    /// Beneficiary FI Advice Information `{6310}`.
    FIBeneficiaryFIAdvice, FIBeneficiaryFIAdvice,
    "crate::segments::defaults::fi_beneficiary_fi_advice"
}

fi_lines_segment! {
    /// Beneficiary Information `{6400}`.
    FIBeneficiary, FIBeneficiary, "crate::segments::defaults::fi_beneficiary"
}

fi_advice_segment! {
    /// Beneficiary Advice Information `{6410}`.
    FIBeneficiaryAdvice, FIBeneficiaryAdvice,
    "crate::segments::defaults::fi_beneficiary_advice"
}

/// Payment Method to Beneficiary `{6420}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FIPaymentMethodToBeneficiary {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::fi_payment_method_to_beneficiary"
        )
    )]
    pub tag: String,
    /// Always `CHECK`.
    pub payment_method: String,
    pub additional_information: String,
}

impl FIPaymentMethodToBeneficiary {
    pub fn new() -> Self {
        Self {
            tag: Tag::FIPaymentMethodToBeneficiary.literal().into(),
            payment_method: "CHECK".into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::FIPaymentMethodToBeneficiary)?;
        if self.payment_method != "CHECK" {
            return Err(FieldError::new(
                "PaymentMethod",
                ErrorKind::PaymentMethod,
                &self.payment_method,
            ));
        }
        checked(
            "AdditionalInformation",
            &self.additional_information,
            validators::alphanumeric,
        )?;
        Ok(())
    }
}

/// Additional FI to FI Information `{6500}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FIAdditionalFIToFI {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::fi_additional_fi_to_fi")
    )]
    pub tag: String,
    pub additional_fi_to_fi: AdditionalFiToFi,
}

impl FIAdditionalFIToFI {
    pub fn new() -> Self {
        Self {
            tag: Tag::FIAdditionalFIToFI.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::FIAdditionalFIToFI)?;
        let lines = &self.additional_fi_to_fi;
        checked("LineOne", &lines.line_one, validators::alphanumeric)?;
        checked("LineTwo", &lines.line_two, validators::alphanumeric)?;
        checked("LineThree", &lines.line_three, validators::alphanumeric)?;
        checked("LineFour", &lines.line_four, validators::alphanumeric)?;
        checked("LineFive", &lines.line_five, validators::alphanumeric)?;
        checked("LineSix", &lines.line_six, validators::alphanumeric)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_fi_beneficiary() -> FIBeneficiary {
        let mut fib = FIBeneficiary::new();
        fib.fi_to_fi.line_one = "Line One".into();
        fib.fi_to_fi.line_two = "Line Two".into();
        fib.fi_to_fi.line_three = "Line Three".into();
        fib.fi_to_fi.line_four = "Line Four".into();
        fib.fi_to_fi.line_five = "Line Five".into();
        fib.fi_to_fi.line_six = "Line Six".into();
        fib
    }

    #[test]
    fn test_fi_beneficiary_lines_alphanumeric() {
        assert!(mock_fi_beneficiary().validate().is_ok());

        let mut fib = mock_fi_beneficiary();
        fib.fi_to_fi.line_four = "®".into();
        let err = fib.validate().unwrap_err();
        assert_eq!(err, FieldError::new("LineFour", ErrorKind::NonAlphanumeric, "®"));
    }

    #[test]
    fn test_fi_beneficiary_tag_mismatch() {
        let mut fib = mock_fi_beneficiary();
        fib.tag = "{9999}".into();
        assert_eq!(
            fib.validate().unwrap_err(),
            FieldError::new("tag", ErrorKind::ValidTagForType, "{9999}")
        );
    }

    #[test]
    fn test_advice_code() {
        let mut advice = FIBeneficiaryAdvice::new();
        advice.advice.advice_code = "LTR".into();
        advice.advice.line_one = "Advice Information".into();
        assert!(advice.validate().is_ok());

        advice.advice.advice_code = "XYZ".into();
        assert_eq!(advice.validate().unwrap_err().kind, ErrorKind::AdviceCode);
    }

    #[test]
    fn test_payment_method() {
        let mut pm = FIPaymentMethodToBeneficiary::new();
        pm.additional_information = "Check Number 123".into();
        assert!(pm.validate().is_ok());

        pm.payment_method = "WIRE".into();
        assert_eq!(pm.validate().unwrap_err().kind, ErrorKind::PaymentMethod);
    }
}
