//! Beneficiary block segments (`{4000}`–`{4400}`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError};
use crate::party::{FinancialInstitution, Personal};
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked};

/// Validates a financial institution block shared by the FI routing
/// segments. `allow_empty_code` distinguishes the tags that accept an
/// absent identification code (Originator FI, Instructing FI) from those
/// that do not.
pub(crate) fn validate_financial_institution(
    fi: &FinancialInstitution,
    allow_empty_code: bool,
) -> Result<(), FieldError> {
    checked(
        "IdentificationCode",
        &fi.identification_code,
        validators::identification_code,
    )?;
    if fi.identification_code.is_empty() && !allow_empty_code {
        return Err(FieldError::new(
            "IdentificationCode",
            ErrorKind::IdentificationCode,
            "",
        ));
    }
    checked("Identifier", &fi.identifier, validators::alphanumeric)?;
    checked("Name", &fi.name, validators::alphanumeric)?;
    checked(
        "AddressLineOne",
        &fi.address.address_line_one,
        validators::alphanumeric,
    )?;
    checked(
        "AddressLineTwo",
        &fi.address.address_line_two,
        validators::alphanumeric,
    )?;
    checked(
        "AddressLineThree",
        &fi.address.address_line_three,
        validators::alphanumeric,
    )?;
    Ok(())
}

/// If the identification code is present the identifier is mandatory, and
/// vice versa.
pub(crate) fn paired_identification(
    code_field: &'static str,
    identifier_field: &'static str,
    code: &str,
    identifier: &str,
) -> Result<(), FieldError> {
    if !code.is_empty() && identifier.is_empty() {
        return Err(FieldError::required(identifier_field));
    }
    if code.is_empty() && !identifier.is_empty() {
        return Err(FieldError::required(code_field));
    }
    Ok(())
}

/// Beneficiary Intermediary FI `{4000}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BeneficiaryIntermediaryFI {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::beneficiary_intermediary_fi"
        )
    )]
    pub tag: String,
    pub financial_institution: FinancialInstitution,
}

impl BeneficiaryIntermediaryFI {
    pub fn new() -> Self {
        Self {
            tag: Tag::BeneficiaryIntermediaryFI.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::BeneficiaryIntermediaryFI)?;
        validate_financial_institution(&self.financial_institution, false)
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        paired_identification(
            "BeneficiaryIntermediaryFI.FinancialInstitution.IdentificationCode",
            "BeneficiaryIntermediaryFI.FinancialInstitution.Identifier",
            &self.financial_institution.identification_code,
            &self.financial_institution.identifier,
        )
    }
}

/// Beneficiary FI `{4100}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BeneficiaryFI {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::beneficiary_fi")
    )]
    pub tag: String,
    pub financial_institution: FinancialInstitution,
}

impl BeneficiaryFI {
    pub fn new() -> Self {
        Self {
            tag: Tag::BeneficiaryFI.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::BeneficiaryFI)?;
        validate_financial_institution(&self.financial_institution, false)
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        paired_identification(
            "BeneficiaryFI.FinancialInstitution.IdentificationCode",
            "BeneficiaryFI.FinancialInstitution.Identifier",
            &self.financial_institution.identification_code,
            &self.financial_institution.identifier,
        )
    }
}

/// Beneficiary `{4200}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Beneficiary {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::beneficiary")
    )]
    pub tag: String,
    pub personal: Personal,
}

impl Beneficiary {
    pub fn new() -> Self {
        Self {
            tag: Tag::Beneficiary.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::Beneficiary)?;
        checked(
            "IdentificationCode",
            &self.personal.identification_code,
            validators::identification_code,
        )?;
        checked("Identifier", &self.personal.identifier, validators::alphanumeric)?;
        checked("Name", &self.personal.name, validators::alphanumeric)?;
        checked(
            "AddressLineOne",
            &self.personal.address.address_line_one,
            validators::alphanumeric,
        )?;
        checked(
            "AddressLineTwo",
            &self.personal.address.address_line_two,
            validators::alphanumeric,
        )?;
        checked(
            "AddressLineThree",
            &self.personal.address.address_line_three,
            validators::alphanumeric,
        )?;
        Ok(())
    }
}

/// Reference for Beneficiary `{4320}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BeneficiaryReference {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::beneficiary_reference")
    )]
    pub tag: String,
    pub beneficiary_reference: String,
}

impl BeneficiaryReference {
    pub fn new() -> Self {
        Self {
            tag: Tag::BeneficiaryReference.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::BeneficiaryReference)?;
        checked(
            "BeneficiaryReference",
            &self.beneficiary_reference,
            validators::alphanumeric,
        )?;
        Ok(())
    }
}

/// Account Debited in Drawdown `{4400}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AccountDebitedDrawdown {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::account_debited_drawdown")
    )]
    pub tag: String,
    pub personal: Personal,
}

impl AccountDebitedDrawdown {
    pub fn new() -> Self {
        Self {
            tag: Tag::AccountDebitedDrawdown.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::AccountDebitedDrawdown)?;
        // Only a demand deposit account may be debited.
        if self.personal.identification_code != "D" {
            return Err(FieldError::new(
                "IdentificationCode",
                ErrorKind::IdentificationCode,
                &self.personal.identification_code,
            ));
        }
        checked("Identifier", &self.personal.identifier, validators::alphanumeric)?;
        checked("Name", &self.personal.name, validators::alphanumeric)?;
        checked(
            "AddressLineOne",
            &self.personal.address.address_line_one,
            validators::alphanumeric,
        )?;
        checked(
            "AddressLineTwo",
            &self.personal.address.address_line_two,
            validators::alphanumeric,
        )?;
        checked(
            "AddressLineThree",
            &self.personal.address.address_line_three,
            validators::alphanumeric,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.personal.identifier.is_empty() {
            return Err(FieldError::required("Identifier"));
        }
        if self.personal.name.is_empty() {
            return Err(FieldError::required("Name"));
        }
        Ok(())
    }
}
