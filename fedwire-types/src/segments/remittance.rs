//! Unstructured addenda and the structured remittance block
//! (`{8200}`–`{8750}`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError};
use crate::party::{RemittanceAmount, RemittanceData};
use crate::segments::expect_tag;
use crate::tag::Tag;
use crate::validators::{self, checked, DateFormat};

/// Organization identification type.
pub const ORGANIZATION_ID: &str = "OI";
/// Private identification type.
pub const PRIVATE_ID: &str = "PI";
/// Private identification code for date and place of birth.
pub const PIC_DATE_BIRTH_PLACE: &str = "DPOB";
/// Organization identification code for a SWIFT BIC or BEI.
pub const OIC_SWIFT_BIC_OR_BEI: &str = "SWBB";

fn validate_remittance_data(data: &RemittanceData) -> Result<(), FieldError> {
    checked("Name", &data.name, validators::alphanumeric)?;
    checked("AddressType", &data.address_type, validators::address_type)?;
    checked("Department", &data.department, validators::alphanumeric)?;
    checked("SubDepartment", &data.sub_department, validators::alphanumeric)?;
    checked("StreetName", &data.street_name, validators::alphanumeric)?;
    checked("BuildingNumber", &data.building_number, validators::alphanumeric)?;
    checked("PostCode", &data.post_code, validators::alphanumeric)?;
    checked("TownName", &data.town_name, validators::alphanumeric)?;
    checked(
        "CountrySubDivisionState",
        &data.country_sub_division_state,
        validators::alphanumeric,
    )?;
    checked("Country", &data.country, validators::alphanumeric)?;
    checked("AddressLineOne", &data.address_line_one, validators::alphanumeric)?;
    checked("AddressLineTwo", &data.address_line_two, validators::alphanumeric)?;
    checked(
        "AddressLineThree",
        &data.address_line_three,
        validators::alphanumeric,
    )?;
    checked("AddressLineFour", &data.address_line_four, validators::alphanumeric)?;
    checked("AddressLineFive", &data.address_line_five, validators::alphanumeric)?;
    checked("AddressLineSix", &data.address_line_six, validators::alphanumeric)?;
    checked(
        "AddressLineSeven",
        &data.address_line_seven,
        validators::alphanumeric,
    )?;
    checked(
        "CountryOfResidence",
        &data.country_of_residence,
        validators::alphanumeric,
    )?;
    Ok(())
}

/// Identification code membership depends on the identification type.
fn validate_identification_code(
    identification_type: &str,
    identification_code: &str,
) -> Result<(), FieldError> {
    match identification_type {
        ORGANIZATION_ID => checked(
            "IdentificationCode",
            identification_code,
            validators::organization_identification_code,
        ),
        PRIVATE_ID => checked(
            "IdentificationCode",
            identification_code,
            validators::private_identification_code,
        ),
        _ => Ok(()),
    }
}

/// The DPOB/SWBB inclusion rules shared by remittance originator and
/// beneficiary:
///
/// * the identification number is not permitted for code `DPOB`;
/// * the issuer is not permitted when the number is absent or the code is
///   `SWBB` or `DPOB` (the issuer would be ambiguous);
/// * date and place of birth is only permitted for code `DPOB`.
fn remittance_identification_inclusion(
    identification_code: &str,
    identification_number: &str,
    identification_number_issuer: &str,
    date_birth_place: &str,
) -> Result<(), FieldError> {
    if identification_code == PIC_DATE_BIRTH_PLACE && !identification_number.is_empty() {
        return Err(FieldError::new(
            "IdentificationNumber",
            ErrorKind::InvalidProperty,
            identification_number,
        ));
    }
    if (identification_number.is_empty()
        || identification_code == OIC_SWIFT_BIC_OR_BEI
        || identification_code == PIC_DATE_BIRTH_PLACE)
        && !identification_number_issuer.is_empty()
    {
        return Err(FieldError::new(
            "IdentificationNumberIssuer",
            ErrorKind::InvalidProperty,
            identification_number_issuer,
        ));
    }
    if identification_code != PIC_DATE_BIRTH_PLACE && !date_birth_place.is_empty() {
        return Err(FieldError::new(
            "DateBirthPlace",
            ErrorKind::InvalidProperty,
            date_birth_place,
        ));
    }
    Ok(())
}

/// Unstructured Addenda `{8200}`. The body is preserved verbatim, markup
/// and all.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct UnstructuredAddenda {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::unstructured_addenda")
    )]
    pub tag: String,
    pub addenda: String,
}

impl UnstructuredAddenda {
    pub fn new() -> Self {
        Self {
            tag: Tag::UnstructuredAddenda.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::UnstructuredAddenda)
    }
}

/// Related Remittance Information `{8250}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RelatedRemittance {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::related_remittance")
    )]
    pub tag: String,
    pub remittance_identification: String,
    /// `EDIC`, `EMAL`, `FAXI`, `POST`, `SMSM`, or `URID`.
    pub remittance_location_method: String,
    /// E-mail or URL address.
    pub remittance_location_electronic_address: String,
    pub remittance_data: RemittanceData,
}

impl RelatedRemittance {
    pub fn new() -> Self {
        Self {
            tag: Tag::RelatedRemittance.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::RelatedRemittance)?;
        checked(
            "RemittanceIdentification",
            &self.remittance_identification,
            validators::alphanumeric,
        )?;
        checked(
            "RemittanceLocationMethod",
            &self.remittance_location_method,
            validators::remittance_location_method,
        )?;
        checked(
            "RemittanceLocationElectronicAddress",
            &self.remittance_location_electronic_address,
            validators::alphanumeric,
        )?;
        validate_remittance_data(&self.remittance_data)
    }
}

/// Remittance Originator `{8300}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RemittanceOriginator {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::remittance_originator")
    )]
    pub tag: String,
    /// `OI` (organization) or `PI` (private).
    pub identification_type: String,
    pub identification_code: String,
    pub identification_number: String,
    pub identification_number_issuer: String,
    pub remittance_data: RemittanceData,
    pub contact_name: String,
    pub contact_phone_number: String,
    pub contact_mobile_number: String,
    pub contact_fax_number: String,
    /// E-mail or URL address.
    pub contact_electronic_address: String,
    pub contact_other: String,
}

impl RemittanceOriginator {
    pub fn new() -> Self {
        Self {
            tag: Tag::RemittanceOriginator.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::RemittanceOriginator)?;
        checked(
            "IdentificationType",
            &self.identification_type,
            validators::identification_type,
        )?;
        validate_identification_code(&self.identification_type, &self.identification_code)?;
        checked(
            "IdentificationNumber",
            &self.identification_number,
            validators::alphanumeric,
        )?;
        checked(
            "IdentificationNumberIssuer",
            &self.identification_number_issuer,
            validators::alphanumeric,
        )?;
        validate_remittance_data(&self.remittance_data)?;
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
            "ContactElectronicAddress",
            &self.contact_electronic_address,
            validators::alphanumeric,
        )?;
        checked("ContactOther", &self.contact_other, validators::alphanumeric)?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.remittance_data.name.is_empty() {
            return Err(FieldError::required("Name"));
        }
        remittance_identification_inclusion(
            &self.identification_code,
            &self.identification_number,
            &self.identification_number_issuer,
            &self.remittance_data.date_birth_place,
        )
    }
}

/// Remittance Beneficiary `{8350}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RemittanceBeneficiary {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::remittance_beneficiary")
    )]
    pub tag: String,
    pub identification_type: String,
    pub identification_code: String,
    pub identification_number: String,
    pub identification_number_issuer: String,
    pub remittance_data: RemittanceData,
}

impl RemittanceBeneficiary {
    pub fn new() -> Self {
        Self {
            tag: Tag::RemittanceBeneficiary.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::RemittanceBeneficiary)?;
        checked("Name", &self.remittance_data.name, validators::alphanumeric)?;
        checked(
            "IdentificationType",
            &self.identification_type,
            validators::identification_type,
        )?;
        validate_identification_code(&self.identification_type, &self.identification_code)?;
        checked(
            "IdentificationNumber",
            &self.identification_number,
            validators::alphanumeric,
        )?;
        checked(
            "IdentificationNumberIssuer",
            &self.identification_number_issuer,
            validators::alphanumeric,
        )?;
        validate_remittance_data(&self.remittance_data)
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.remittance_data.name.is_empty() {
            return Err(FieldError::required("Name"));
        }
        remittance_identification_inclusion(
            &self.identification_code,
            &self.identification_number,
            &self.identification_number_issuer,
            &self.remittance_data.date_birth_place,
        )
    }
}

macro_rules! remittance_document_segment {
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
            /// `PROP` requires the proprietary code; any other member of
            /// the document type set forbids it.
            pub document_type_code: String,
            pub proprietary_document_type_code: String,
            pub document_identification_number: String,
            pub issuer: String,
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
                checked(
                    "DocumentTypeCode",
                    &self.document_type_code,
                    validators::document_type_code,
                )?;
                checked(
                    "ProprietaryDocumentTypeCode",
                    &self.proprietary_document_type_code,
                    validators::alphanumeric,
                )?;
                checked(
                    "DocumentIdentificationNumber",
                    &self.document_identification_number,
                    validators::alphanumeric,
                )?;
                checked("Issuer", &self.issuer, validators::alphanumeric)?;
                Ok(())
            }

            fn field_inclusion(&self) -> Result<(), FieldError> {
                if self.document_identification_number.is_empty() {
                    return Err(FieldError::required("DocumentIdentificationNumber"));
                }
                if self.document_type_code == "PROP" {
                    if self.proprietary_document_type_code.is_empty() {
                        return Err(FieldError::required("ProprietaryDocumentTypeCode"));
                    }
                } else if !self.proprietary_document_type_code.is_empty() {
                    return Err(FieldError::new(
                        "ProprietaryDocumentTypeCode",
                        ErrorKind::InvalidProperty,
                        &self.proprietary_document_type_code,
                    ));
                }
                Ok(())
            }
        }
    };
}

remittance_document_segment! {
    /// Primary Remittance Document `{8400}`.
    PrimaryRemittanceDocument, PrimaryRemittanceDocument,
    "crate::segments::defaults::primary_remittance_document"
}

remittance_document_segment! {
    /// Secondary Remittance Document `{8700}`.
    SecondaryRemittanceDocument, SecondaryRemittanceDocument,
    "crate::segments::defaults::secondary_remittance_document"
}

macro_rules! remittance_amount_segment {
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
            pub remittance_amount: RemittanceAmount,
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
                checked(
                    "CurrencyCode",
                    &self.remittance_amount.currency_code,
                    validators::currency_code,
                )?;
                checked("Amount", &self.remittance_amount.amount, validators::amount)?;
                Ok(())
            }

            fn field_inclusion(&self) -> Result<(), FieldError> {
                if self.remittance_amount.currency_code.is_empty() {
                    return Err(FieldError::required("CurrencyCode"));
                }
                if self.remittance_amount.amount.is_empty() {
                    return Err(FieldError::required("Amount"));
                }
                Ok(())
            }
        }
    };
}

remittance_amount_segment! {
    /// Actual Amount Paid `{8450}`.
    ActualAmountPaid, ActualAmountPaid,
    "crate::segments::defaults::actual_amount_paid"
}

remittance_amount_segment! {
    /// Gross Amount of Remittance Document `{8500}`.
    GrossAmountRemittanceDocument, GrossAmountRemittanceDocument,
    "crate::segments::defaults::gross_amount_remittance_document"
}

remittance_amount_segment! {
    /// Amount of Negotiated Discount `{8550}`.
    AmountNegotiatedDiscount, AmountNegotiatedDiscount,
    "crate::segments::defaults::amount_negotiated_discount"
}

/// Adjustment `{8600}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Adjustment {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::adjustment")
    )]
    pub tag: String,
    /// `01` pricing error, `03` extension error, `04` item not accepted,
    /// `05` incorrect quantity, `06` incorrect product, `07` returns,
    /// `11` credit as agreed, `12` covered by credit memo, `59` item not
    /// received, `75` total order not received, `81` credit memo, `CM`
    /// covered by other credit memo.
    pub adjustment_reason_code: String,
    /// `CRDT` or `DBIT`.
    pub credit_debit_indicator: String,
    pub remittance_amount: RemittanceAmount,
    pub additional_info: String,
}

impl Adjustment {
    pub fn new() -> Self {
        Self {
            tag: Tag::Adjustment.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::Adjustment)?;
        checked(
            "AdjustmentReasonCode",
            &self.adjustment_reason_code,
            validators::adjustment_reason_code,
        )?;
        checked(
            "CreditDebitIndicator",
            &self.credit_debit_indicator,
            validators::credit_debit_indicator,
        )?;
        checked(
            "CurrencyCode",
            &self.remittance_amount.currency_code,
            validators::currency_code,
        )?;
        checked("Amount", &self.remittance_amount.amount, validators::amount)?;
        checked("AdditionalInfo", &self.additional_info, validators::alphanumeric)?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.adjustment_reason_code.is_empty() {
            return Err(FieldError::required("AdjustmentReasonCode"));
        }
        if self.credit_debit_indicator.is_empty() {
            return Err(FieldError::required("CreditDebitIndicator"));
        }
        if self.remittance_amount.currency_code.is_empty() {
            return Err(FieldError::required("CurrencyCode"));
        }
        if self.remittance_amount.amount.is_empty() {
            return Err(FieldError::required("Amount"));
        }
        Ok(())
    }
}

/// Date of Remittance Document `{8650}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateRemittanceDocument {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::date_remittance_document")
    )]
    pub tag: String,
    /// `CCYYMMDD`.
    pub date_remittance_document: String,
}

impl DateRemittanceDocument {
    pub fn new() -> Self {
        Self {
            tag: Tag::DateRemittanceDocument.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;
        expect_tag(&self.tag, Tag::DateRemittanceDocument)?;
        checked("DateRemittanceDocument", &self.date_remittance_document, |v| {
            validators::date(v, DateFormat::Ccyymmdd)
        })?;
        Ok(())
    }

    fn field_inclusion(&self) -> Result<(), FieldError> {
        if self.date_remittance_document.is_empty() {
            return Err(FieldError::required("DateRemittanceDocument"));
        }
        Ok(())
    }
}

/// Remittance Free Text `{8750}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RemittanceFreeText {
    #[cfg_attr(
        feature = "serde",
        serde(skip, default = "crate::segments::defaults::remittance_free_text")
    )]
    pub tag: String,
    pub line_one: String,
    pub line_two: String,
    pub line_three: String,
}

impl RemittanceFreeText {
    pub fn new() -> Self {
        Self {
            tag: Tag::RemittanceFreeText.literal().into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        expect_tag(&self.tag, Tag::RemittanceFreeText)?;
        checked("LineOne", &self.line_one, validators::alphanumeric)?;
        checked("LineTwo", &self.line_two, validators::alphanumeric)?;
        checked("LineThree", &self.line_three, validators::alphanumeric)?;
        Ok(())
    }
}
