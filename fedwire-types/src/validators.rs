//! Lexical validators.
//!
//! Pure functions over field values. Each returns the root [`ErrorKind`] on
//! failure; call sites wrap the kind into a [`FieldError`](crate::error::FieldError)
//! with the field name and offending value via [`checked`].
//!
//! Widths are counted in code points everywhere, so multi-byte characters
//! (e.g. `®`) are rejected outright rather than truncated.

use chrono::NaiveDate;

use crate::error::{ErrorKind, FieldError};

/// Runs `validator` over `value` and wraps a failure into a [`FieldError`]
/// naming `field`.
pub fn checked(
    field: &'static str,
    value: &str,
    validator: impl Fn(&str) -> Result<(), ErrorKind>,
) -> Result<(), FieldError> {
    validator(value).map_err(|kind| FieldError::new(field, kind, value))
}

fn is_alphanumeric_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | ',' | '.' | ' ' | '(' | ')' | '/' | '\'' | '&' | '?' | ':'
        )
}

/// Printable ASCII letters, digits, and the punctuation permitted on the
/// wire. The `*` delimiter is never a valid value character.
pub fn alphanumeric(value: &str) -> Result<(), ErrorKind> {
    if value.chars().all(is_alphanumeric_char) {
        Ok(())
    } else {
        Err(ErrorKind::NonAlphanumeric)
    }
}

/// Digits `0`-`9` only.
pub fn numeric(value: &str) -> Result<(), ErrorKind> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ErrorKind::NonNumeric)
    }
}

/// Uppercase `A`-`Z` and `0`-`9` only.
pub fn upper_alphanumeric(value: &str) -> Result<(), ErrorKind> {
    if value
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(ErrorKind::UpperAlpha)
    }
}

/// A wire amount: at least one leading digit, at most one comma as the
/// decimal marker, nothing else. `$1,234.56` goes on the wire as `1234,56`.
pub fn amount(value: &str) -> Result<(), ErrorKind> {
    if !value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(ErrorKind::NonAmount);
    }
    let mut commas = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => {}
            ',' => commas += 1,
            _ => return Err(ErrorKind::NonAmount),
        }
    }
    if commas > 1 {
        return Err(ErrorKind::NonAmount);
    }
    Ok(())
}

/// ISO 4217 alphabetic currency codes.
const CURRENCY_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP",
    "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP",
    "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HRK", "HTG", "HUF", "IDR",
    "ILS", "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW",
    "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA",
    "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD",
    "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG",
    "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE",
    "SLL", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP",
    "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED",
    "VES", "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XDR",
    "XOF", "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "YER", "ZAR", "ZMW", "ZWL",
];

/// Exactly three uppercase letters naming an ISO 4217 currency.
pub fn currency_code(value: &str) -> Result<(), ErrorKind> {
    if CURRENCY_CODES.binary_search(&value).is_ok() {
        Ok(())
    } else {
        Err(ErrorKind::NonCurrencyCode)
    }
}

fn member_of(set: &[&str], value: &str, kind: ErrorKind) -> Result<(), ErrorKind> {
    if set.contains(&value) {
        Ok(())
    } else {
        Err(kind)
    }
}

/// Financial institution and party identification codes. The empty form is
/// accepted here; tags that require a code apply their own restriction on
/// top.
pub fn identification_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &["", "B", "C", "D", "F", "U"],
        value,
        ErrorKind::IdentificationCode,
    )
}

pub fn advice_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &["", "HLD", "LTR", "PHN", "TLX", "WRE"],
        value,
        ErrorKind::AdviceCode,
    )
}

pub fn type_code(value: &str) -> Result<(), ErrorKind> {
    member_of(&["10", "15", "16"], value, ErrorKind::TypeCode)
}

pub fn sub_type_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &["00", "01", "02", "07", "08", "31", "32", "33", "90"],
        value,
        ErrorKind::SubTypeCode,
    )
}

pub fn business_function_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &[
            "BTR", "CKS", "CTP", "CTR", "DEP", "DRB", "DRC", "DRW", "FFR", "FFS", "SVC",
        ],
        value,
        ErrorKind::BusinessFunctionCode,
    )
}

pub fn local_instrument_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &[
            "ANSI", "COVS", "GXML", "IXML", "NARR", "PROP", "RMTS", "RRMT", "S820", "SWIF", "UEDI",
        ],
        value,
        ErrorKind::LocalInstrumentCode,
    )
}

pub fn charge_details(value: &str) -> Result<(), ErrorKind> {
    member_of(&["B", "S"], value, ErrorKind::ChargeDetails)
}

pub fn test_production_code(value: &str) -> Result<(), ErrorKind> {
    member_of(&["T", "P"], value, ErrorKind::TestProductionCode)
}

pub fn message_duplication_code(value: &str) -> Result<(), ErrorKind> {
    member_of(&["", "P"], value, ErrorKind::MessageDuplicationCode)
}

/// `0`-`6` are reserved for market practice conventions, `7`-`9` for
/// bilateral agreements.
pub fn payment_notification_indicator(value: &str) -> Result<(), ErrorKind> {
    if value.len() <= 1 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ErrorKind::PaymentNotificationIndicator)
    }
}

/// Remittance identification type: organization (`OI`) or private (`PI`).
pub fn identification_type(value: &str) -> Result<(), ErrorKind> {
    member_of(&["OI", "PI"], value, ErrorKind::IdentificationType)
}

pub fn organization_identification_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &["BANK", "CUST", "DUNS", "EMPL", "GS1G", "PROP", "SWBB", "TXID"],
        value,
        ErrorKind::OrganizationIdentificationCode,
    )
}

pub fn private_identification_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &[
            "ARNU", "CCPT", "CUST", "DPOB", "DRLC", "EMPL", "NIDN", "PROP", "SOSE", "TXID",
        ],
        value,
        ErrorKind::PrivateIdentificationCode,
    )
}

pub fn document_type_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &[
            "AROI", "BOLD", "CINV", "CMCN", "CNFA", "CREN", "DEBN", "DISP", "DNFA", "HIRI",
            "INVS", "MSIN", "PROP", "PUOR", "SBIN", "SOAC", "TSUT", "VCHR",
        ],
        value,
        ErrorKind::DocumentTypeCode,
    )
}

pub fn address_type(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &["", "ADDR", "BIZZ", "DLVY", "HOME", "MLTO", "PBOX"],
        value,
        ErrorKind::AddressType,
    )
}

pub fn remittance_location_method(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &["", "EDIC", "EMAL", "FAXI", "POST", "SMSM", "URID"],
        value,
        ErrorKind::RemittanceLocationMethod,
    )
}

pub fn credit_debit_indicator(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &["CRDT", "DBIT"],
        value,
        ErrorKind::CreditDebitIndicator,
    )
}

pub fn adjustment_reason_code(value: &str) -> Result<(), ErrorKind> {
    member_of(
        &[
            "01", "03", "04", "05", "06", "07", "11", "12", "59", "75", "81", "CM",
        ],
        value,
        ErrorKind::AdjustmentReasonCode,
    )
}

/// Date layouts used on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DateFormat {
    /// `CCYYMMDD`, e.g. input cycle dates.
    Ccyymmdd,
    /// `MMDDCCYY`.
    Mmddccyy,
}

/// Validates an eight-digit date in the given layout.
///
/// The century is restricted to 19 or 20; month and day validity comes from
/// the calendar, so `20190229` fails with `ValidDay`.
pub fn date(value: &str, format: DateFormat) -> Result<(), ErrorKind> {
    if value.len() != 8 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ErrorKind::ValidDate);
    }
    let (century, year, month, day) = match format {
        DateFormat::Ccyymmdd => (&value[0..2], &value[0..4], &value[4..6], &value[6..8]),
        DateFormat::Mmddccyy => (&value[4..6], &value[4..8], &value[0..2], &value[2..4]),
    };
    // The eight digits are ASCII, so the unwraps cannot fail.
    let century: u32 = century.parse().unwrap();
    let year: i32 = year.parse().unwrap();
    let month: u32 = month.parse().unwrap();
    let day: u32 = day.parse().unwrap();

    if !(19..=20).contains(&century) {
        return Err(ErrorKind::ValidCentury);
    }
    if !(1..=12).contains(&month) {
        return Err(ErrorKind::ValidMonth);
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(ErrorKind::ValidDay);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric("").is_ok());
        assert!(alphanumeric("Line One").is_ok());
        assert!(alphanumeric("A-1, (B).C/D'E&F?G:H").is_ok());
        assert_eq!(alphanumeric("a*b"), Err(ErrorKind::NonAlphanumeric));
        assert_eq!(alphanumeric("®"), Err(ErrorKind::NonAlphanumeric));
        assert_eq!(alphanumeric("{1520}"), Err(ErrorKind::NonAlphanumeric));
    }

    #[test]
    fn test_numeric() {
        assert!(numeric("0123456789").is_ok());
        assert_eq!(numeric("12a"), Err(ErrorKind::NonNumeric));
        assert_eq!(numeric("1 2"), Err(ErrorKind::NonNumeric));
    }

    #[test]
    fn test_amount() {
        assert!(amount("1500,49").is_ok());
        assert!(amount("0,99").is_ok());
        assert!(amount("000000001234").is_ok());
        assert_eq!(amount(""), Err(ErrorKind::NonAmount));
        assert_eq!(amount(",49"), Err(ErrorKind::NonAmount));
        assert_eq!(amount("1-0"), Err(ErrorKind::NonAmount));
        assert_eq!(amount("1,2,3"), Err(ErrorKind::NonAmount));
        assert_eq!(amount("00000Z001500,49"), Err(ErrorKind::NonAmount));
    }

    #[test]
    fn test_currency_code() {
        assert!(currency_code("USD").is_ok());
        assert!(currency_code("EUR").is_ok());
        assert_eq!(currency_code("usd"), Err(ErrorKind::NonCurrencyCode));
        assert_eq!(currency_code("US"), Err(ErrorKind::NonCurrencyCode));
        assert_eq!(currency_code("ZZZ"), Err(ErrorKind::NonCurrencyCode));
    }

    #[test]
    fn test_currency_table_is_sorted() {
        assert!(CURRENCY_CODES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_identification_code() {
        for code in ["", "B", "C", "D", "F", "U"] {
            assert!(identification_code(code).is_ok());
        }
        assert_eq!(
            identification_code("A"),
            Err(ErrorKind::IdentificationCode)
        );
    }

    #[test]
    fn test_date_ccyymmdd() {
        assert!(date("20230323", DateFormat::Ccyymmdd).is_ok());
        assert_eq!(
            date("2023032", DateFormat::Ccyymmdd),
            Err(ErrorKind::ValidDate)
        );
        assert_eq!(
            date("2023O323", DateFormat::Ccyymmdd),
            Err(ErrorKind::ValidDate)
        );
        assert_eq!(
            date("20231323", DateFormat::Ccyymmdd),
            Err(ErrorKind::ValidMonth)
        );
        assert_eq!(
            date("20230230", DateFormat::Ccyymmdd),
            Err(ErrorKind::ValidDay)
        );
        assert_eq!(
            date("18990101", DateFormat::Ccyymmdd),
            Err(ErrorKind::ValidCentury)
        );
    }

    #[test]
    fn test_date_mmddccyy() {
        assert!(date("03232023", DateFormat::Mmddccyy).is_ok());
        assert_eq!(
            date("13232023", DateFormat::Mmddccyy),
            Err(ErrorKind::ValidMonth)
        );
        assert_eq!(
            date("02302023", DateFormat::Mmddccyy),
            Err(ErrorKind::ValidDay)
        );
    }

    #[test]
    fn test_leap_day() {
        assert!(date("20200229", DateFormat::Ccyymmdd).is_ok());
        assert_eq!(
            date("20190229", DateFormat::Ccyymmdd),
            Err(ErrorKind::ValidDay)
        );
    }
}
