//! Originator block segments (`{5000}`–`{6000}`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError};
use crate::party::{FinancialInstitution, Personal};
use crate::segments::beneficiary::{paired_identification, validate_financial_institution};
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked};

/// Originator `{5000}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Originator {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::originator")
    )]
    pub tag: String,
    pub personal: Personal,
}

impl Originator {
    pub fn new() -> Self {
        Self {
            tag: Tag::Originator.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::Originator)?;
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

    fn field_inclusion(&self) -> Result<(), FieldError> {
        paired_identification(
            "Originator.Personal.IdentificationCode",
            "Originator.Personal.Identifier",
            &self.personal.identification_code,
            &self.personal.identifier,
        )
    }
}

/// Originator Option F `{5010}`, the structured alternative to `{5000}`
/// for Customer Transfer Plus.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct OriginatorOptionF {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::originator_option_f")
    )]
    pub tag: String,
    /// Either `/` followed by an account number, or a code from the
    /// uppercase identifier set followed by `/` and an identifier, e.g.
    /// `TXID/123-45-6789`.
    pub party_identifier: String,
    /// Line format `1/NAME`.
    pub name: String,
    pub line_one: String,
    pub line_two: String,
    pub line_three: String,
}

const OPTION_F_UID_CODES: &[&str] = &[
    "ARNU", "CCPT", "CUST", "DRLC", "EMPL", "NIDN", "SOSE", "TXID",
];

fn valid_option_f_line(line: &str) -> bool {
    if line.is_empty() {
        return true;
    }
    let mut chars = line.chars();
    let digit = chars.next();
    let slash = chars.next();
    let rest = chars.as_str();
    matches!(digit, Some('1'..='8'))
        && slash == Some('/')
        && !rest.is_empty()
        && validators::alphanumeric(rest).is_ok()
}

impl OriginatorOptionF {
    pub fn new() -> Self {
        Self {
            tag: Tag::OriginatorOptionF.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::OriginatorOptionF)?;
        self.validate_party_identifier()?;
        if !self.name.starts_with("1/") || self.name.len() < 3 {
            return Err(FieldError::new("Name", ErrorKind::OptionFName, &self.name));
        }
        for (field, line) in [
            ("LineOne", &self.line_one),
            ("LineTwo", &self.line_two),
            ("LineThree", &self.line_three),
        ] {
            if !valid_option_f_line(line) {
                return Err(FieldError::new(field, ErrorKind::OptionFLine, line));
            }
        }
        Ok(())
    }

    fn validate_party_identifier(&self) -> Result<(), FieldError> {
        let invalid = || {
            FieldError::new(
                "PartyIdentifier",
                ErrorKind::PartyIdentifier,
                &self.party_identifier,
            )
        };
        if let Some(account) = self.party_identifier.strip_prefix('/') {
            if account.trim().is_empty() || validators::alphanumeric(account).is_err() {
                return Err(invalid());
            }
            return Ok(());
        }
        match self.party_identifier.split_once('/') {
            Some((code, identifier))
                if OPTION_F_UID_CODES.contains(&code)
                    && !identifier.trim().is_empty()
                    && validators::alphanumeric(identifier).is_ok() =>
            {
                Ok(())
            }
            _ => Err(invalid()),
        }
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.party_identifier.is_empty() {
            return Err(FieldError::required("PartyIdentifier"));
        }
        if self.name.is_empty() {
            return Err(FieldError::required("Name"));
        }
        Ok(())
    }
}

/// Originator FI `{5100}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct OriginatorFI {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::originator_fi")
    )]
    pub tag: String,
    pub financial_institution: FinancialInstitution,
}

impl OriginatorFI {
    pub fn new() -> Self {
        Self {
            tag: Tag::OriginatorFI.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::OriginatorFI)?;
        // Unlike the beneficiary FI tags, the empty identification code is
        // legal here.
        validate_financial_institution(&self.financial_institution, true)
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        paired_identification(
            "OriginatorFI.FinancialInstitution.IdentificationCode",
            "OriginatorFI.FinancialInstitution.Identifier",
            &self.financial_institution.identification_code,
            &self.financial_institution.identifier,
        )
    }
}

/// Instructing FI `{5200}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct InstructingFI {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::instructing_fi")
    )]
    pub tag: String,
    pub financial_institution: FinancialInstitution,
}

impl InstructingFI {
    pub fn new() -> Self {
        Self {
            tag: Tag::InstructingFI.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::InstructingFI)?;
        validate_financial_institution(&self.financial_institution, true)
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        paired_identification(
            "InstructingFI.FinancialInstitution.IdentificationCode",
            "InstructingFI.FinancialInstitution.Identifier",
            &self.financial_institution.identification_code,
            &self.financial_institution.identifier,
        )
    }
}

/// Account Credited in Drawdown `{5400}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AccountCreditedDrawdown {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::account_credited_drawdown"
        )
    )]
    pub tag: String,
    /// Nine-digit account number.
    pub drawdown_credit_account_number: String,
}

impl AccountCreditedDrawdown {
    pub fn new() -> Self {
        Self {
            tag: Tag::AccountCreditedDrawdown.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::AccountCreditedDrawdown)?;
        checked(
            "DrawdownCreditAccountNumber",
            &self.drawdown_credit_account_number,
            validators::numeric,
        )?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.drawdown_credit_account_number.is_empty() {
            return Err(FieldError::required("DrawdownCreditAccountNumber"));
        }
        Ok(())
    }
}

/// Originator to Beneficiary Information `{6000}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct OriginatorToBeneficiary {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip,
            default = "crate::segments::defaults::originator_to_beneficiary"
        )
    )]
    pub tag: String,
    pub line_one: String,
    pub line_two: String,
    pub line_three: String,
    pub line_four: String,
}

impl OriginatorToBeneficiary {
    pub fn new() -> Self {
        Self {
            tag: Tag::OriginatorToBeneficiary.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::OriginatorToBeneficiary)?;
        checked("LineOne", &self.line_one, validators::alphanumeric)?;
        checked("LineTwo", &self.line_two, validators::alphanumeric)?;
        checked("LineThree", &self.line_three, validators::alphanumeric)?;
        checked("LineFour", &self.line_four, validators::alphanumeric)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_f_party_identifier() {
        let mut oof = OriginatorOptionF::new();
        oof.name = "1/SMITH JOHN".into();

        oof.party_identifier = "/123456789".into();
        assert!(oof.validate().is_ok());

        oof.party_identifier = "TXID/123-45-6789".into();
        assert!(oof.validate().is_ok());

        oof.party_identifier = "XXXX/123".into();
        assert_eq!(
            oof.validate().unwrap_err().kind,
            ErrorKind::PartyIdentifier
        );

        oof.party_identifier = "/".into();
        assert_eq!(
            oof.validate().unwrap_err().kind,
            ErrorKind::PartyIdentifier
        );
    }

    #[test]
    fn test_option_f_name_and_lines() {
        let mut oof = OriginatorOptionF::new();
        oof.party_identifier = "/123456789".into();
        oof.name = "SMITH JOHN".into();
        assert_eq!(oof.validate().unwrap_err().kind, ErrorKind::OptionFName);

        oof.name = "1/SMITH JOHN".into();
        oof.line_one = "2/123 MAIN STREET".into();
        oof.line_two = "3/US/NEW YORK".into();
        assert!(oof.validate().is_ok());

        oof.line_three = "9/BAD SELECTOR".into();
        assert_eq!(oof.validate().unwrap_err().kind, ErrorKind::OptionFLine);
    }

    #[test]
    fn test_originator_allows_empty_identification() {
        let mut orig = Originator::new();
        orig.personal.name = "Originator Name".into();
        assert!(orig.validate().is_ok());
    }

    #[test]
    fn test_account_credited_drawdown_numeric() {
        let mut acd = AccountCreditedDrawdown::new();
        acd.drawdown_credit_account_number = "12345678A".into();
        assert_eq!(acd.validate().unwrap_err().kind, ErrorKind::NonNumeric);

        acd.drawdown_credit_account_number = "123456789".into();
        assert!(acd.validate().is_ok());
    }
}
