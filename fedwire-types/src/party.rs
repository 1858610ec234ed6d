//! Composite records shared across tag segments.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-line wire address.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Address {
    pub address_line_one: String,
    pub address_line_two: String,
    pub address_line_three: String,
}

/// A financial institution: identification code, identifier, name, address.
///
/// Used by the FI routing segments (`{4000}`, `{4100}`, `{5100}`, `{5200}`).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FinancialInstitution {
    /// One of `B` (SWIFT BIC), `C` (CHIPS participant), `D` (demand deposit
    /// account), `F` (Fed routing number), `U` (CHIPS identifier). Some
    /// tags also allow the empty form.
    pub identification_code: String,
    pub identifier: String,
    pub name: String,
    pub address: Address,
}

/// A non-institution party (beneficiary, originator, drawdown accounts).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Personal {
    pub identification_code: String,
    pub identifier: String,
    pub name: String,
    pub address: Address,
}

/// The six Swift-style lines carried by the cover-payment segments.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CoverPayment {
    pub swift_field_tag: String,
    pub swift_line_one: String,
    pub swift_line_two: String,
    pub swift_line_three: String,
    pub swift_line_four: String,
    pub swift_line_five: String,
    pub swift_line_six: String,
}

/// An advice to the receiver: method plus free-text lines.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Advice {
    /// `HLD`, `LTR`, `PHN`, `TLX`, or `WRE`.
    pub advice_code: String,
    pub line_one: String,
    pub line_two: String,
    pub line_three: String,
    pub line_four: String,
    pub line_five: String,
    pub line_six: String,
}

/// Six lines of FI-to-FI information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FiToFi {
    pub line_one: String,
    pub line_two: String,
    pub line_three: String,
    pub line_four: String,
    pub line_five: String,
    pub line_six: String,
}

/// Six lines of additional FI-to-FI information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AdditionalFiToFi {
    pub line_one: String,
    pub line_two: String,
    pub line_three: String,
    pub line_four: String,
    pub line_five: String,
    pub line_six: String,
}

/// The structured name-and-address block of the remittance segments.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RemittanceData {
    pub name: String,
    /// `ADDR`, `BIZZ`, `DLVY`, `HOME`, `MLTO`, or `PBOX`.
    pub address_type: String,
    pub department: String,
    pub sub_department: String,
    pub street_name: String,
    pub building_number: String,
    pub post_code: String,
    pub town_name: String,
    pub country_sub_division_state: String,
    pub country: String,
    pub address_line_one: String,
    pub address_line_two: String,
    pub address_line_three: String,
    pub address_line_four: String,
    pub address_line_five: String,
    pub address_line_six: String,
    pub address_line_seven: String,
    pub country_of_residence: String,
    /// Only permitted for identification code `DPOB`.
    pub date_birth_place: String,
}

/// A currency code and amount pair used by the remittance amount segments.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RemittanceAmount {
    pub currency_code: String,
    pub amount: String,
}
