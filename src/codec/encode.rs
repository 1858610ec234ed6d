//! # Encoding of segments.
//!
//! [`Encoder::encode`] produces an [`Encoded`] holding the canonical wire
//! form of a segment. Tail fields are truncated to their maximum width,
//! trimmed, and `*`-terminated; runs of consecutive delimiters collapse to
//! a single `*`, so blank fields vanish from the wire:
//!
//! ```rust
//! use fedwire_codec::encode::Encoder;
//! use fedwire_codec::types::segments::FIBeneficiary;
//! use fedwire_codec::types::Segment;
//! use fedwire_codec::SegmentCodec;
//!
//! let mut fib = FIBeneficiary::new();
//! fib.fi_to_fi.line_one = "Line One".into();
//! fib.fi_to_fi.line_three = "Line Three".into();
//! fib.fi_to_fi.line_five = "Line Five".into();
//!
//! let encoded = SegmentCodec.encode(&Segment::from(fib));
//! assert_eq!(encoded.as_str(), "{6400}Line One*Line Three*Line Five*");
//! ```

use fedwire_types::Segment;

use crate::fields::char_offset;
use crate::SegmentCodec;

/// Encoder.
///
/// Implemented for types that know how to produce the canonical wire form
/// of a Fedwire item.
pub trait Encoder {
    type Message<'a>;

    /// Encode this message into its canonical wire form.
    fn encode(&self, message: &Self::Message<'_>) -> Encoded;
}

/// An encoded segment in canonical wire form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoded {
    data: String,
}

impl Encoded {
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Dump the encoded data.
    pub fn dump(self) -> String {
        self.data
    }
}

impl From<Encoded> for String {
    fn from(encoded: Encoded) -> Self {
        encoded.data
    }
}

impl Encoder for SegmentCodec {
    type Message<'a> = Segment;

    fn encode(&self, message: &Self::Message<'_>) -> Encoded {
        let mut ctx = EncodeContext::new();
        message.encode_ctx(&mut ctx);

        Encoded { data: ctx.finish() }
    }
}

//--------------------------------------------------------------------------------------------------

/// Accumulates a segment's wire form with the format's padding rules.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct EncodeContext {
    out: String,
}

impl EncodeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&mut self, value: &str) {
        self.out.push_str(value);
    }

    /// Positional field: left-justified, space-filled to `width`, truncated
    /// past it.
    pub fn alpha(&mut self, value: &str, width: usize) {
        let truncated = &value[..char_offset(value, width)];
        self.out.push_str(truncated);
        for _ in truncated.chars().count()..width {
            self.out.push(' ');
        }
    }

    /// Positional numeric field: right-justified, zero-filled; an
    /// over-width value keeps its rightmost digits.
    pub fn numeric(&mut self, value: &str, width: usize) {
        let count = value.chars().count();
        if count > width {
            let start = char_offset(value, count - width);
            self.out.push_str(&value[start..]);
            return;
        }
        for _ in count..width {
            self.out.push('0');
        }
        self.out.push_str(value);
    }

    /// Right-justified zero-filled, as a string.
    pub fn numeric_field(value: &str, width: usize) -> String {
        let mut ctx = Self::new();
        ctx.numeric(value, width);
        ctx.out
    }

    /// Tail field: truncated to `width`, trimmed, `*`-terminated. A blank
    /// field directly after an existing delimiter contributes nothing, so
    /// consecutive delimiters collapse to one on the wire.
    pub fn delimited(&mut self, value: &str, width: usize) {
        let trimmed = value[..char_offset(value, width)].trim();
        if trimmed.is_empty() && self.out.ends_with('*') {
            return;
        }
        self.out.push_str(trimmed);
        self.out.push('*');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

//--------------------------------------------------------------------------------------------------

pub(crate) trait EncodeIntoContext {
    fn encode_ctx(&self, ctx: &mut EncodeContext);
}

macro_rules! dispatch {
    ($($variant:ident,)*) => {
        impl EncodeIntoContext for Segment {
            fn encode_ctx(&self, ctx: &mut EncodeContext) {
                match self {
                    $(Segment::$variant(inner) => inner.encode_ctx(ctx),)*
                }
            }
        }
    };
}

dispatch! {
    MessageDisposition,
    ReceiptTimeStamp,
    OutputMessageAccountabilityData,
    ErrorWire,
    SenderSupplied,
    TypeSubType,
    InputMessageAccountabilityData,
    Amount,
    SenderDepositoryInstitution,
    SenderReference,
    ReceiverDepositoryInstitution,
    PreviousMessageIdentifier,
    BusinessFunctionCode,
    LocalInstrument,
    PaymentNotification,
    Charges,
    InstructedAmount,
    ExchangeRate,
    BeneficiaryIntermediaryFI,
    BeneficiaryFI,
    Beneficiary,
    BeneficiaryReference,
    AccountDebitedDrawdown,
    Originator,
    OriginatorOptionF,
    OriginatorFI,
    InstructingFI,
    AccountCreditedDrawdown,
    OriginatorToBeneficiary,
    FIReceiverFI,
    FIDrawdownDebitAccountAdvice,
    FIIntermediaryFI,
    FIIntermediaryFIAdvice,
    FIBeneficiaryFI,
    FIBeneficiaryFIAdvice,
    FIBeneficiary,
    FIBeneficiaryAdvice,
    FIPaymentMethodToBeneficiary,
    FIAdditionalFIToFI,
    CurrencyInstructedAmount,
    OrderingCustomer,
    OrderingInstitution,
    IntermediaryInstitution,
    InstitutionAccount,
    BeneficiaryCustomer,
    Remittance,
    SenderToReceiver,
    UnstructuredAddenda,
    RelatedRemittance,
    RemittanceOriginator,
    RemittanceBeneficiary,
    PrimaryRemittanceDocument,
    ActualAmountPaid,
    GrossAmountRemittanceDocument,
    AmountNegotiatedDiscount,
    Adjustment,
    DateRemittanceDocument,
    SecondaryRemittanceDocument,
    RemittanceFreeText,
    ServiceMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_pads_and_truncates() {
        let mut ctx = EncodeContext::new();
        ctx.alpha("AB", 4);
        assert_eq!(ctx.finish(), "AB  ");

        let mut ctx = EncodeContext::new();
        ctx.alpha("Swift Field Tag", 5);
        assert_eq!(ctx.finish(), "Swift");
    }

    #[test]
    fn test_numeric_zero_fills() {
        assert_eq!(EncodeContext::numeric_field("1500,49", 15), "000000001500,49");
        assert_eq!(EncodeContext::numeric_field("1234", 4), "1234");
        // An over-width value keeps its rightmost digits.
        assert_eq!(EncodeContext::numeric_field("987654321", 4), "4321");
    }

    #[test]
    fn test_delimited_collapses_blank_runs() {
        let mut ctx = EncodeContext::new();
        ctx.raw("{6400}");
        for value in ["Line One", "", "Line Three", "", "Line Five", ""] {
            ctx.delimited(value, 33);
        }
        assert_eq!(ctx.finish(), "{6400}Line One*Line Three*Line Five*");
    }

    #[test]
    fn test_delimited_keeps_first_blank_terminator() {
        let mut ctx = EncodeContext::new();
        ctx.raw("{1130}1XYZ");
        ctx.delimited("", 35);
        assert_eq!(ctx.finish(), "{1130}1XYZ*");
    }

    #[test]
    fn test_all_blank_tail_emits_single_terminator() {
        let mut ctx = EncodeContext::new();
        ctx.raw("{3320}");
        ctx.delimited("", 16);
        ctx.delimited("", 16);
        assert_eq!(ctx.finish(), "{3320}*");
    }
}
