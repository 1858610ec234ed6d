//! # Decoding of segments.
//!
//! [`Decoder::decode`] recognizes the leading `{NNNN}` tag literal, frames
//! the segment (fixed width, `*`-delimited, or length-prefixed addenda),
//! and hands the slice to the tag's parser. Parsing is structural only:
//! it gives no guarantee that all fields are present or valid. Callers
//! must invoke `validate` on the result separately.
//!
//! Delimited segments end at the next recognized tag literal that
//! immediately follows a `*`. Literal lookalikes inside field data stay
//! attached to their segment, so an Error Wire description may itself
//! contain `{1520}`.

use fedwire_types::{Segment, Tag};
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::recognize;
use nom::sequence::delimited;
use thiserror::Error;

use crate::fields::char_offset;
use crate::segments::{
    beneficiary, cover_payment, fed_appended, fi_to_fi, mandatory, originator, remittance,
    service_message, transfer_info,
};
use crate::SegmentCodec;

/// Decoder.
///
/// Implemented for types that know how to decode a specific Fedwire item.
pub trait Decoder {
    type Message<'a>: Sized;
    type Error;

    /// Decodes one item from the front of `input`, returning the remainder.
    fn decode<'a>(&self, input: &'a str) -> Result<(&'a str, Self::Message<'a>), Self::Error>;
}

/// Error during segment decoding.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum SegmentDecodeError {
    /// The leading six characters are not a known tag literal.
    #[error("{tag} is an invalid tag")]
    InvalidTag { tag: String },

    /// The segment's total length lies outside the tag's declared range
    /// (counted in code points).
    #[error("{tag} must be [{min}, {max}] characters and found {length}")]
    TagWrongLength {
        tag: Tag,
        min: usize,
        max: usize,
        length: usize,
    },

    /// A subfield was too short to slice its positional prefix.
    #[error("{field_name} must be {expected} characters or more and found {actual}")]
    FieldWrongMinLength {
        field_name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Rejects a record whose code-point length lies outside `[min, max]`.
pub(crate) fn check_length(
    tag: Tag,
    record: &str,
    min: usize,
    max: usize,
) -> Result<(), SegmentDecodeError> {
    let length = record.chars().count();
    if length < min || length > max {
        return Err(SegmentDecodeError::TagWrongLength {
            tag,
            min,
            max,
            length,
        });
    }
    Ok(())
}

/// `{NNNN}`.
fn tag_literal(input: &str) -> nom::IResult<&str, &str> {
    recognize(delimited(
        char('{'),
        take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
        char('}'),
    ))(input)
}

/// How a tag's total extent is determined on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Frame {
    /// Fixed total length in code points.
    Fixed(usize),
    /// Extends to the next recognized tag literal following a `*`, or end
    /// of message.
    Delimited,
    /// Self-framed by the four-digit addenda length prefix.
    Addenda,
}

pub(crate) fn frame(tag: Tag) -> Frame {
    match tag {
        Tag::MessageDisposition => Frame::Fixed(11),
        Tag::ReceiptTimeStamp => Frame::Fixed(18),
        Tag::OutputMessageAccountabilityData => Frame::Fixed(40),
        Tag::SenderSupplied => Frame::Fixed(18),
        Tag::TypeSubType => Frame::Fixed(10),
        Tag::InputMessageAccountabilityData => Frame::Fixed(28),
        Tag::Amount => Frame::Fixed(18),
        Tag::SenderDepositoryInstitution => Frame::Fixed(33),
        Tag::ReceiverDepositoryInstitution => Frame::Fixed(33),
        Tag::AccountCreditedDrawdown => Frame::Fixed(15),
        Tag::DateRemittanceDocument => Frame::Fixed(14),
        Tag::UnstructuredAddenda => Frame::Addenda,
        _ => Frame::Delimited,
    }
}

/// Byte offset where a delimited segment ends: the next recognized tag
/// literal immediately preceded by `*`, or end of input.
fn delimited_end(input: &str) -> usize {
    let bytes = input.as_bytes();
    // Skip this segment's own tag; the earliest boundary needs a `*` ahead
    // of it.
    let mut at = 7;
    while at + 6 <= bytes.len() {
        // An ASCII byte is never a UTF-8 continuation byte, so `{` marks a
        // character boundary.
        if bytes[at] == b'{' && bytes[at - 1] == b'*' {
            if let Ok((_, literal)) = tag_literal(&input[at..]) {
                if Tag::from_literal(literal).is_some() {
                    return at;
                }
            }
        }
        at += 1;
    }
    input.len()
}

/// Byte offset where an unstructured addenda segment ends. The body
/// carries its own four-digit length; without one the segment swallows the
/// rest of the message.
fn addenda_end(input: &str) -> usize {
    let digits = &input[6..char_offset(input, 10)];
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        // Length prefix counts the content after itself.
        let content: usize = digits.parse().unwrap();
        char_offset(input, 10 + content)
    } else {
        log::warn!("unstructured addenda without length prefix consumes the rest of the message");
        input.len()
    }
}

impl Decoder for SegmentCodec {
    type Message<'a> = Segment;
    type Error = SegmentDecodeError;

    fn decode<'a>(&self, input: &'a str) -> Result<(&'a str, Segment), SegmentDecodeError> {
        let literal_end = char_offset(input, 6);
        let tag = tag_literal(input)
            .ok()
            .and_then(|(_, literal)| Tag::from_literal(literal))
            .ok_or_else(|| SegmentDecodeError::InvalidTag {
                tag: input[..literal_end].to_string(),
            })?;

        let end = match frame(tag) {
            Frame::Fixed(chars) => char_offset(input, chars),
            Frame::Delimited => delimited_end(input),
            Frame::Addenda => addenda_end(input),
        };
        let (record, rest) = input.split_at(end);

        let segment: Segment = match tag {
            Tag::MessageDisposition => fed_appended::message_disposition(record)?.into(),
            Tag::ReceiptTimeStamp => fed_appended::receipt_time_stamp(record)?.into(),
            Tag::OutputMessageAccountabilityData => {
                fed_appended::output_message_accountability_data(record)?.into()
            }
            Tag::ErrorWire => fed_appended::error_wire(record)?.into(),
            Tag::SenderSupplied => mandatory::sender_supplied(record)?.into(),
            Tag::TypeSubType => mandatory::type_sub_type(record)?.into(),
            Tag::InputMessageAccountabilityData => {
                mandatory::input_message_accountability_data(record)?.into()
            }
            Tag::Amount => mandatory::amount(record)?.into(),
            Tag::SenderDepositoryInstitution => {
                mandatory::sender_depository_institution(record)?.into()
            }
            Tag::ReceiverDepositoryInstitution => {
                mandatory::receiver_depository_institution(record)?.into()
            }
            Tag::BusinessFunctionCode => mandatory::business_function_code(record)?.into(),
            Tag::SenderReference => transfer_info::sender_reference(record)?.into(),
            Tag::PreviousMessageIdentifier => {
                transfer_info::previous_message_identifier(record)?.into()
            }
            Tag::LocalInstrument => transfer_info::local_instrument(record)?.into(),
            Tag::PaymentNotification => transfer_info::payment_notification(record)?.into(),
            Tag::Charges => transfer_info::charges(record)?.into(),
            Tag::InstructedAmount => transfer_info::instructed_amount(record)?.into(),
            Tag::ExchangeRate => transfer_info::exchange_rate(record)?.into(),
            Tag::BeneficiaryIntermediaryFI => {
                beneficiary::beneficiary_intermediary_fi(record)?.into()
            }
            Tag::BeneficiaryFI => beneficiary::beneficiary_fi(record)?.into(),
            Tag::Beneficiary => beneficiary::beneficiary(record)?.into(),
            Tag::BeneficiaryReference => beneficiary::beneficiary_reference(record)?.into(),
            Tag::AccountDebitedDrawdown => beneficiary::account_debited_drawdown(record)?.into(),
            Tag::Originator => originator::originator(record)?.into(),
            Tag::OriginatorOptionF => originator::originator_option_f(record)?.into(),
            Tag::OriginatorFI => originator::originator_fi(record)?.into(),
            Tag::InstructingFI => originator::instructing_fi(record)?.into(),
            Tag::AccountCreditedDrawdown => {
                originator::account_credited_drawdown(record)?.into()
            }
            Tag::OriginatorToBeneficiary => {
                originator::originator_to_beneficiary(record)?.into()
            }
            Tag::FIReceiverFI => fi_to_fi::fi_receiver_fi(record)?.into(),
            Tag::FIDrawdownDebitAccountAdvice => {
                fi_to_fi::fi_drawdown_debit_account_advice(record)?.into()
            }
            Tag::FIIntermediaryFI => fi_to_fi::fi_intermediary_fi(record)?.into(),
            Tag::FIIntermediaryFIAdvice => fi_to_fi::fi_intermediary_fi_advice(record)?.into(),
            Tag::FIBeneficiaryFI => fi_to_fi::fi_beneficiary_fi(record)?.into(),
            Tag::FIBeneficiaryFIAdvice => fi_to_fi::fi_beneficiary_fi_advice(record)?.into(),
            Tag::FIBeneficiary => fi_to_fi::fi_beneficiary(record)?.into(),
            Tag::FIBeneficiaryAdvice => fi_to_fi::fi_beneficiary_advice(record)?.into(),
            Tag::FIPaymentMethodToBeneficiary => {
                fi_to_fi::fi_payment_method_to_beneficiary(record)?.into()
            }
            Tag::FIAdditionalFIToFI => fi_to_fi::fi_additional_fi_to_fi(record)?.into(),
            Tag::CurrencyInstructedAmount => {
                cover_payment::currency_instructed_amount(record)?.into()
            }
            Tag::OrderingCustomer => cover_payment::ordering_customer(record)?.into(),
            Tag::OrderingInstitution => cover_payment::ordering_institution(record)?.into(),
            Tag::IntermediaryInstitution => {
                cover_payment::intermediary_institution(record)?.into()
            }
            Tag::InstitutionAccount => cover_payment::institution_account(record)?.into(),
            Tag::BeneficiaryCustomer => cover_payment::beneficiary_customer(record)?.into(),
            Tag::Remittance => cover_payment::remittance(record)?.into(),
            Tag::SenderToReceiver => cover_payment::sender_to_receiver(record)?.into(),
            Tag::UnstructuredAddenda => remittance::unstructured_addenda(record)?.into(),
            Tag::RelatedRemittance => remittance::related_remittance(record)?.into(),
            Tag::RemittanceOriginator => remittance::remittance_originator(record)?.into(),
            Tag::RemittanceBeneficiary => remittance::remittance_beneficiary(record)?.into(),
            Tag::PrimaryRemittanceDocument => {
                remittance::primary_remittance_document(record)?.into()
            }
            Tag::ActualAmountPaid => remittance::actual_amount_paid(record)?.into(),
            Tag::GrossAmountRemittanceDocument => {
                remittance::gross_amount_remittance_document(record)?.into()
            }
            Tag::AmountNegotiatedDiscount => {
                remittance::amount_negotiated_discount(record)?.into()
            }
            Tag::Adjustment => remittance::adjustment(record)?.into(),
            Tag::DateRemittanceDocument => remittance::date_remittance_document(record)?.into(),
            Tag::SecondaryRemittanceDocument => {
                remittance::secondary_remittance_document(record)?.into()
            }
            Tag::RemittanceFreeText => remittance::remittance_free_text(record)?.into(),
            Tag::ServiceMessage => service_message::service_message(record)?.into(),
        };

        Ok((rest, segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tag() {
        let err = SegmentCodec.decode("{9999}whatever").unwrap_err();
        assert_eq!(
            err,
            SegmentDecodeError::InvalidTag {
                tag: "{9999}".into()
            }
        );

        let err = SegmentCodec.decode("junk").unwrap_err();
        assert_eq!(err, SegmentDecodeError::InvalidTag { tag: "junk".into() });
    }

    #[test]
    fn test_fixed_frame_leaves_remainder() {
        let (rest, segment) = SegmentCodec
            .decode("{1510}1000{2000}000000001234")
            .unwrap();
        assert_eq!(rest, "{2000}000000001234");
        assert_eq!(segment.tag(), Tag::TypeSubType);
    }

    #[test]
    fn test_delimited_frame_boundary_needs_delimiter() {
        // The embedded {1520} is data, not a boundary: no `*` ahead of it.
        let (rest, segment) = SegmentCodec
            .decode("{1130}1XYZINVLD CYCLE DT/MISSING/INVLD {1520}*{3320}REF*")
            .unwrap();
        assert_eq!(rest, "{3320}REF*");
        match segment {
            Segment::ErrorWire(ew) => {
                assert_eq!(ew.error_description, "INVLD CYCLE DT/MISSING/INVLD {1520}");
            }
            other => panic!("expected ErrorWire, got {other:?}"),
        }
    }

    #[test]
    fn test_addenda_length_prefix_frames_segment() {
        let (rest, segment) = SegmentCodec.decode("{8200}0004данн{8750}Line*").unwrap();
        assert_eq!(rest, "{8750}Line*");
        match segment {
            Segment::UnstructuredAddenda(ua) => assert_eq!(ua.addenda, "0004данн"),
            other => panic!("expected UnstructuredAddenda, got {other:?}"),
        }
    }
}
