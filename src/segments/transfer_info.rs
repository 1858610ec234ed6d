//! Optional transfer information segments (`{3320}`–`{3720}`).

use fedwire_types::segments::{
    Charges, ExchangeRate, InstructedAmount, LocalInstrument, PaymentNotification,
    PreviousMessageIdentifier, SenderReference,
};
use fedwire_types::Tag;

use crate::codec::decode::{check_length, SegmentDecodeError};
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};

pub(crate) fn sender_reference(record: &str) -> Result<SenderReference, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = SenderReference::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.sender_reference = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for SenderReference {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.sender_reference, 16);
    }
}

pub(crate) fn previous_message_identifier(
    record: &str,
) -> Result<PreviousMessageIdentifier, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = PreviousMessageIdentifier::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.previous_message_identifier = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for PreviousMessageIdentifier {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.previous_message_identifier, 22);
    }
}

pub(crate) fn local_instrument(record: &str) -> Result<LocalInstrument, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = LocalInstrument::new();
    segment.tag = cursor.fixed(6);
    segment.local_instrument_code = cursor.fixed(4);
    let mut tail = Tail::new(cursor.rest());
    segment.proprietary_code = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for LocalInstrument {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.local_instrument_code, 4);
        ctx.delimited(&self.proprietary_code, 35);
    }
}

pub(crate) fn payment_notification(
    record: &str,
) -> Result<PaymentNotification, SegmentDecodeError> {
    check_length(Tag::PaymentNotification, record, 13, 2341)?;
    let mut cursor = Cursor::new(record);
    let mut segment = PaymentNotification::new();
    segment.tag = cursor.fixed(6);
    segment.payment_notification_indicator = cursor.fixed(1);
    let mut tail = Tail::new(cursor.rest());
    segment.contact_notification_electronic_address = tail.field();
    segment.contact_name = tail.field();
    segment.contact_phone_number = tail.field();
    segment.contact_mobile_number = tail.field();
    segment.contact_fax_number = tail.field();
    segment.end_to_end_identification = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for PaymentNotification {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.payment_notification_indicator, 1);
        ctx.delimited(&self.contact_notification_electronic_address, 2048);
        ctx.delimited(&self.contact_name, 140);
        ctx.delimited(&self.contact_phone_number, 35);
        ctx.delimited(&self.contact_mobile_number, 35);
        ctx.delimited(&self.contact_fax_number, 35);
        ctx.delimited(&self.end_to_end_identification, 35);
    }
}

pub(crate) fn charges(record: &str) -> Result<Charges, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = Charges::new();
    segment.tag = cursor.fixed(6);
    segment.charge_details = cursor.fixed(1);
    let mut tail = Tail::new(cursor.rest());
    segment.senders_charges_one = tail.field();
    segment.senders_charges_two = tail.field();
    segment.senders_charges_three = tail.field();
    segment.senders_charges_four = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for Charges {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.charge_details, 1);
        ctx.delimited(&self.senders_charges_one, 15);
        ctx.delimited(&self.senders_charges_two, 15);
        ctx.delimited(&self.senders_charges_three, 15);
        ctx.delimited(&self.senders_charges_four, 15);
    }
}

pub(crate) fn instructed_amount(record: &str) -> Result<InstructedAmount, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = InstructedAmount::new();
    segment.tag = cursor.fixed(6);
    segment.currency_code = cursor.fixed(3);
    let mut tail = Tail::new(cursor.rest());
    segment.amount = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for InstructedAmount {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.currency_code, 3);
        if self.amount.is_empty() {
            ctx.delimited("", 15);
        } else {
            ctx.delimited(&EncodeContext::numeric_field(&self.amount, 15), 15);
        }
    }
}

pub(crate) fn exchange_rate(record: &str) -> Result<ExchangeRate, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = ExchangeRate::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.exchange_rate = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for ExchangeRate {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.exchange_rate, 12);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_instrument_round_trip() {
        let segment = local_instrument("{3610}PROPThe Proprietary Code*").unwrap();
        assert_eq!(segment.local_instrument_code, "PROP");
        assert_eq!(segment.proprietary_code, "The Proprietary Code");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), "{3610}PROPThe Proprietary Code*");
    }

    #[test]
    fn test_payment_notification_length() {
        let err = payment_notification("{3620}1*").unwrap_err();
        assert!(matches!(
            err,
            SegmentDecodeError::TagWrongLength { length: 8, .. }
        ));
    }

    #[test]
    fn test_instructed_amount_zero_fills() {
        let segment = instructed_amount("{3710}USD1500,49*").unwrap();
        assert_eq!(segment.currency_code, "USD");
        assert_eq!(segment.amount, "1500,49");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), "{3710}USD000000001500,49*");
    }

    #[test]
    fn test_charges_blank_middle_collapses() {
        let segment = charges("{3700}BUSD100,00**USD50,00*").unwrap();
        assert_eq!(segment.charge_details, "B");
        assert_eq!(segment.senders_charges_one, "USD100,00");
        assert_eq!(segment.senders_charges_two, "");
        assert_eq!(segment.senders_charges_three, "USD50,00");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), "{3700}BUSD100,00*USD50,00*");
    }
}
