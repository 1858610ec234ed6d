//! Optional transfer information segments (`{3320}`–`{3720}`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError};
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked};

/// Sender Reference `{3320}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SenderReference {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::sender_reference")
    )]
    pub tag: String,
    pub sender_reference: String,
}

impl SenderReference {
    pub fn new() -> Self {
        Self {
            tag: Tag::SenderReference.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::SenderReference)?;
        checked(
            "SenderReference",
            &self.sender_reference,
            validators::alphanumeric,
        )?;
        Ok(())
    }
}

/// Previous Message Identifier `{3500}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PreviousMessageIdentifier {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::previous_message_identifier"
        )
    )]
    pub tag: String,
    pub previous_message_identifier: String,
}

impl PreviousMessageIdentifier {
    pub fn new() -> Self {
        Self {
            tag: Tag::PreviousMessageIdentifier.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::PreviousMessageIdentifier)?;
        checked(
            "PreviousMessageIdentifier",
            &self.previous_message_identifier,
            validators::alphanumeric,
        )?;
        Ok(())
    }
}

/// Local Instrument `{3610}`; only permitted for Customer Transfer Plus.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct LocalInstrument {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::local_instrument")
    )]
    pub tag: String,
    /// `ANSI`, `COVS`, `GXML`, `IXML`, `NARR`, `PROP`, `RMTS`, `RRMT`,
    /// `S820`, `SWIF`, or `UEDI`.
    pub local_instrument_code: String,
    /// Only permitted, and then required, for code `PROP`.
    pub proprietary_code: String,
}

impl LocalInstrument {
    pub fn new() -> Self {
        Self {
            tag: Tag::LocalInstrument.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::LocalInstrument)?;
        checked(
            "LocalInstrumentCode",
            &self.local_instrument_code,
            validators::local_instrument_code,
        )?;
        checked(
            "ProprietaryCode",
            &self.proprietary_code,
            validators::alphanumeric,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.local_instrument_code == "PROP" {
            if self.proprietary_code.is_empty() {
                return Err(FieldError::required("ProprietaryCode"));
            }
        } else if !self.proprietary_code.is_empty() {
            return Err(FieldError::new(
                "ProprietaryCode",
                ErrorKind::NotPermitted,
                &self.proprietary_code,
            ));
        }
        Ok(())
    }
}

/// Payment Notification `{3620}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PaymentNotification {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::payment_notification")
    )]
    pub tag: String,
    /// `0`-`6` reserved for market practice conventions, `7`-`9` for
    /// bilateral agreements.
    pub payment_notification_indicator: String,
    pub contact_notification_electronic_address: String,
    pub contact_name: String,
    pub contact_phone_number: String,
    pub contact_mobile_number: String,
    pub contact_fax_number: String,
    pub end_to_end_identification: String,
}

impl PaymentNotification {
    pub fn new() -> Self {
        Self {
            tag: Tag::PaymentNotification.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::PaymentNotification)?;
        checked(
            "PaymentNotificationIndicator",
            &self.payment_notification_indicator,
            validators::payment_notification_indicator,
        )?;
        checked(
            "ContactNotificationElectronicAddress",
            &self.contact_notification_electronic_address,
            validators::alphanumeric,
        )?;
        checked("ContactName", &self.contact_name, validators::alphanumeric)?;
        checked(
            "ContactPhoneNumber",
            &self.contact_phone_number,
            validators::alphanumeric,
        )?;
        checked(
            "ContactMobileNumber",
            &self.contact_mobile_number,
            validators::alphanumeric,
        )?;
        checked(
            "ContactFaxNumber",
            &self.contact_fax_number,
            validators::alphanumeric,
        )?;
        checked(
            "EndToEndIdentification",
            &self.end_to_end_identification,
            validators::alphanumeric,
        )?;
        Ok(())
    }
}

/// Charges `{3700}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Charges {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::charges")
    )]
    pub tag: String,
    /// `B` charged to the beneficiary, `S` shared.
    pub charge_details: String,
    pub senders_charges_one: String,
    pub senders_charges_two: String,
    pub senders_charges_three: String,
    pub senders_charges_four: String,
}

impl Charges {
    pub fn new() -> Self {
        Self {
            tag: Tag::Charges.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::Charges)?;
        checked(
            "ChargeDetails",
            &self.charge_details,
            validators::charge_details,
        )?;
        checked(
            "SendersChargesOne",
            &self.senders_charges_one,
            validators::alphanumeric,
        )?;
        checked(
            "SendersChargesTwo",
            &self.senders_charges_two,
            validators::alphanumeric,
        )?;
        checked(
            "SendersChargesThree",
            &self.senders_charges_three,
            validators::alphanumeric,
        )?;
        checked(
            "SendersChargesFour",
            &self.senders_charges_four,
            validators::alphanumeric,
        )?;
        Ok(())
    }
}

/// Instructed Amount `{3710}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct InstructedAmount {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::instructed_amount")
    )]
    pub tag: String,
    pub currency_code: String,
    pub amount: String,
}

impl InstructedAmount {
    pub fn new() -> Self {
        Self {
            tag: Tag::InstructedAmount.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::InstructedAmount)?;
        checked("CurrencyCode", &self.currency_code, validators::currency_code)?;
        checked("Amount", &self.amount, validators::amount)?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.currency_code.is_empty() {
            return Err(FieldError::required("CurrencyCode"));
        }
        if self.amount.is_empty() {
            return Err(FieldError::required("Amount"));
        }
        Ok(())
    }
}

/// Exchange Rate `{3720}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ExchangeRate {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::exchange_rate")
    )]
    pub tag: String,
    /// Digits with an optional comma as the decimal marker.
    pub exchange_rate: String,
}

impl ExchangeRate {
    pub fn new() -> Self {
        Self {
            tag: Tag::ExchangeRate.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::ExchangeRate)?;
        checked("ExchangeRate", &self.exchange_rate, validators::amount)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_instrument_proprietary_code() {
        let mut li = LocalInstrument::new();
        li.local_instrument_code = "PROP".into();
        assert_eq!(
            li.validate().unwrap_err(),
            FieldError::required("ProprietaryCode")
        );

        li.proprietary_code = "PROP CODE".into();
        assert!(li.validate().is_ok());

        li.local_instrument_code = "ANSI".into();
        assert_eq!(
            li.validate().unwrap_err().kind,
            ErrorKind::NotPermitted
        );
    }

    #[test]
    fn test_payment_notification_indicator() {
        let mut pn = PaymentNotification::new();
        pn.payment_notification_indicator = "7".into();
        assert!(pn.validate().is_ok());

        pn.payment_notification_indicator = "A".into();
        assert_eq!(
            pn.validate().unwrap_err().kind,
            ErrorKind::PaymentNotificationIndicator
        );
    }

    #[test]
    fn test_charges_details() {
        let mut charges = Charges::new();
        charges.charge_details = "B".into();
        assert!(charges.validate().is_ok());

        charges.charge_details = "X".into();
        assert_eq!(charges.validate().unwrap_err().kind, ErrorKind::ChargeDetails);
    }

    #[test]
    fn test_instructed_amount_requires_both() {
        let mut ia = InstructedAmount::new();
        ia.amount = "1500,49".into();
        assert_eq!(
            ia.validate().unwrap_err(),
            FieldError::required("CurrencyCode")
        );

        ia.currency_code = "USD".into();
        assert!(ia.validate().is_ok());
    }
}
