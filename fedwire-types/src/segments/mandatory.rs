//! The seven segments every Fedwire message must carry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError};
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked, DateFormat};

/// Sender Supplied Information `{1500}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SenderSupplied {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::sender_supplied")
    )]
    pub tag: String,
    /// Must be `30`.
    pub format_version: String,
    pub user_request_correlation: String,
    /// `T` (test) or `P` (production).
    pub test_production_code: String,
    /// Empty for an original message, `P` for a resend.
    pub message_duplication_code: String,
}

impl SenderSupplied {
    pub fn new() -> Self {
        Self {
            tag: Tag::SenderSupplied.literal().into(),
            format_version: "30".into(),
            test_production_code: "T".into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::SenderSupplied)?;
        if self.format_version != "30" {
            return Err(FieldError::new(
                "FormatVersion",
                ErrorKind::FormatVersion,
                &self.format_version,
            ));
        }
        checked(
            "UserRequestCorrelation",
            &self.user_request_correlation,
            validators::alphanumeric,
        )?;
        checked(
            "TestProductionCode",
            &self.test_production_code,
            validators::test_production_code,
        )?;
        checked(
            "MessageDuplicationCode",
            &self.message_duplication_code,
            validators::message_duplication_code,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.format_version.is_empty() {
            return Err(FieldError::required("FormatVersion"));
        }
        if self.test_production_code.is_empty() {
            return Err(FieldError::required("TestProductionCode"));
        }
        Ok(())
    }
}

/// Type/Subtype `{1510}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TypeSubType {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::type_sub_type")
    )]
    pub tag: String,
    /// `10` funds transfer, `15` foreign transfer, `16` settlement
    /// transfer.
    pub type_code: String,
    pub sub_type_code: String,
}

impl TypeSubType {
    pub fn new() -> Self {
        Self {
            tag: Tag::TypeSubType.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::TypeSubType)?;
        checked("TypeCode", &self.type_code, validators::type_code)?;
        checked("SubTypeCode", &self.sub_type_code, validators::sub_type_code)?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.type_code.is_empty() {
            return Err(FieldError::required("TypeCode"));
        }
        if self.sub_type_code.is_empty() {
            return Err(FieldError::required("SubTypeCode"));
        }
        Ok(())
    }

    /// The four-character `type ‖ subtype` pair the composition rules are
    /// expressed over.
    pub fn type_sub_type(&self) -> String {
        format!("{}{}", self.type_code, self.sub_type_code)
    }
}

/// Input Message Accountability Data (IMAD) `{1520}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct InputMessageAccountabilityData {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::input_message_accountability_data"
        )
    )]
    pub tag: String,
    /// `CCYYMMDD`.
    pub input_cycle_date: String,
    pub input_source: String,
    pub input_sequence_number: String,
}

impl InputMessageAccountabilityData {
    pub fn new() -> Self {
        Self {
            tag: Tag::InputMessageAccountabilityData.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::InputMessageAccountabilityData)?;
        checked("InputCycleDate", &self.input_cycle_date, |v| {
            validators::date(v, DateFormat::Ccyymmdd)
        })?;
        checked("InputSource", &self.input_source, validators::alphanumeric)?;
        checked(
            "InputSequenceNumber",
            &self.input_sequence_number,
            validators::numeric,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.input_cycle_date.is_empty() {
            return Err(FieldError::required("InputCycleDate"));
        }
        if self.input_source.is_empty() {
            return Err(FieldError::required("InputSource"));
        }
        if self.input_sequence_number.is_empty() {
            return Err(FieldError::required("InputSequenceNumber"));
        }
        Ok(())
    }
}

/// Amount `{2000}`, twelve numeric characters with implied cents.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Amount {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::amount")
    )]
    pub tag: String,
    pub amount: String,
}

impl Amount {
    pub fn new() -> Self {
        Self {
            tag: Tag::Amount.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::Amount)?;
        checked("Amount", &self.amount, validators::amount)?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.amount.is_empty() {
            return Err(FieldError::required("Amount"));
        }
        Ok(())
    }
}

/// Sender Depository Institution `{3100}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SenderDepositoryInstitution {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::sender_depository_institution"
        )
    )]
    pub tag: String,
    /// Nine-digit ABA routing number.
    pub sender_aba_number: String,
    pub sender_short_name: String,
}

impl SenderDepositoryInstitution {
    pub fn new() -> Self {
        Self {
            tag: Tag::SenderDepositoryInstitution.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::SenderDepositoryInstitution)?;
        checked("SenderABANumber", &self.sender_aba_number, validators::numeric)?;
        checked(
            "SenderShortName",
            &self.sender_short_name,
            validators::alphanumeric,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.sender_aba_number.is_empty() {
            return Err(FieldError::required("SenderABANumber"));
        }
        Ok(())
    }
}

/// Receiver Depository Institution `{3400}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReceiverDepositoryInstitution {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::receiver_depository_institution"
        )
    )]
    pub tag: String,
    pub receiver_aba_number: String,
    pub receiver_short_name: String,
}

impl ReceiverDepositoryInstitution {
    pub fn new() -> Self {
        Self {
            tag: Tag::ReceiverDepositoryInstitution.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::ReceiverDepositoryInstitution)?;
        checked(
            "ReceiverABANumber",
            &self.receiver_aba_number,
            validators::numeric,
        )?;
        checked(
            "ReceiverShortName",
            &self.receiver_short_name,
            validators::alphanumeric,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.receiver_aba_number.is_empty() {
            return Err(FieldError::required("ReceiverABANumber"));
        }
        Ok(())
    }
}

/// Business Function Code `{3600}`, the message's top-level control field.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BusinessFunctionCode {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::business_function_code")
    )]
    pub tag: String,
    /// `BTR`, `CKS`, `CTP`, `CTR`, `DEP`, `DRB`, `DRC`, `DRW`, `FFR`,
    /// `FFS`, or `SVC`.
    pub business_function_code: String,
    pub transaction_type_code: String,
}

impl BusinessFunctionCode {
    pub fn new() -> Self {
        Self {
            tag: Tag::BusinessFunctionCode.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::BusinessFunctionCode)?;
        checked(
            "BusinessFunctionCode",
            &self.business_function_code,
            validators::business_function_code,
        )?;
        checked(
            "TransactionTypeCode",
            &self.transaction_type_code,
            validators::alphanumeric,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.business_function_code.is_empty() {
            return Err(FieldError::required("BusinessFunctionCode"));
        }
        Ok(())
    }
}
