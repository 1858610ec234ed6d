//! FI-to-FI information block segments (`{6100}`–`{6500}`).

use fedwire_types::party::{AdditionalFiToFi, Advice, FiToFi};
use fedwire_types::segments::{
    FIAdditionalFIToFI, FIBeneficiary, FIBeneficiaryAdvice, FIBeneficiaryFI,
    FIBeneficiaryFIAdvice, FIDrawdownDebitAccountAdvice, FIIntermediaryFI,
    FIIntermediaryFIAdvice, FIPaymentMethodToBeneficiary, FIReceiverFI,
};
use fedwire_types::Tag;

use crate::codec::decode::{check_length, SegmentDecodeError};
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};

fn parse_fi_to_fi(tail: &mut Tail) -> FiToFi {
    FiToFi {
        line_one: tail.field(),
        line_two: tail.field(),
        line_three: tail.field(),
        line_four: tail.field(),
        line_five: tail.field(),
        line_six: tail.field(),
    }
}

fn encode_fi_to_fi(ctx: &mut EncodeContext, tag: &str, fi_to_fi: &FiToFi) {
    ctx.raw(tag);
    ctx.delimited(&fi_to_fi.line_one, 30);
    ctx.delimited(&fi_to_fi.line_two, 33);
    ctx.delimited(&fi_to_fi.line_three, 33);
    ctx.delimited(&fi_to_fi.line_four, 33);
    ctx.delimited(&fi_to_fi.line_five, 33);
    ctx.delimited(&fi_to_fi.line_six, 33);
}

fn encode_advice(ctx: &mut EncodeContext, tag: &str, advice: &Advice) {
    ctx.raw(tag);
    ctx.alpha(&advice.advice_code, 3);
    ctx.delimited(&advice.line_one, 26);
    ctx.delimited(&advice.line_two, 33);
    ctx.delimited(&advice.line_three, 33);
    ctx.delimited(&advice.line_four, 33);
    ctx.delimited(&advice.line_five, 33);
    ctx.delimited(&advice.line_six, 33);
}

macro_rules! fi_lines_codec {
    ($parse:ident, $ty:ident) => {
        pub(crate) fn $parse(record: &str) -> Result<$ty, SegmentDecodeError> {
            let mut cursor = Cursor::new(record);
            let mut segment = <$ty>::new();
            segment.tag = cursor.fixed(6);
            let mut tail = Tail::new(cursor.rest());
            segment.fi_to_fi = parse_fi_to_fi(&mut tail);
            Ok(segment)
        }

        impl EncodeIntoContext for $ty {
            fn encode_ctx(&self, ctx: &mut EncodeContext) {
                encode_fi_to_fi(ctx, &self.tag, &self.fi_to_fi);
            }
        }
    };
}

macro_rules! fi_advice_codec {
    ($parse:ident, $ty:ident) => {
        pub(crate) fn $parse(record: &str) -> Result<$ty, SegmentDecodeError> {
            let mut cursor = Cursor::new(record);
            let mut segment = <$ty>::new();
            segment.tag = cursor.fixed(6);
            segment.advice.advice_code = cursor.fixed(3);
            let mut tail = Tail::new(cursor.rest());
            segment.advice.line_one = tail.field();
            segment.advice.line_two = tail.field();
            segment.advice.line_three = tail.field();
            segment.advice.line_four = tail.field();
            segment.advice.line_five = tail.field();
            segment.advice.line_six = tail.field();
            Ok(segment)
        }

        impl EncodeIntoContext for $ty {
            fn encode_ctx(&self, ctx: &mut EncodeContext) {
                encode_advice(ctx, &self.tag, &self.advice);
            }
        }
    };
}

fi_lines_codec!(fi_receiver_fi, FIReceiverFI);
fi_lines_codec!(fi_intermediary_fi, FIIntermediaryFI);
fi_lines_codec!(fi_beneficiary_fi, FIBeneficiaryFI);
fi_lines_codec!(fi_beneficiary, FIBeneficiary);

fi_advice_codec!(fi_intermediary_fi_advice, FIIntermediaryFIAdvice);
fi_advice_codec!(fi_beneficiary_fi_advice, FIBeneficiaryFIAdvice);
fi_advice_codec!(fi_beneficiary_advice, FIBeneficiaryAdvice);

pub(crate) fn fi_drawdown_debit_account_advice(
    record: &str,
) -> Result<FIDrawdownDebitAccountAdvice, SegmentDecodeError> {
    check_length(Tag::FIDrawdownDebitAccountAdvice, record, 9, 206)?;
    let mut cursor = Cursor::new(record);
    let mut segment = FIDrawdownDebitAccountAdvice::new();
    segment.tag = cursor.fixed(6);
    segment.advice.advice_code = cursor.fixed(3);
    let mut tail = Tail::new(cursor.rest());
    segment.advice.line_one = tail.field();
    segment.advice.line_two = tail.field();
    segment.advice.line_three = tail.field();
    segment.advice.line_four = tail.field();
    segment.advice.line_five = tail.field();
    segment.advice.line_six = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for FIDrawdownDebitAccountAdvice {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_advice(ctx, &self.tag, &self.advice);
    }
}

pub(crate) fn fi_payment_method_to_beneficiary(
    record: &str,
) -> Result<FIPaymentMethodToBeneficiary, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = FIPaymentMethodToBeneficiary::new();
    segment.tag = cursor.fixed(6);
    segment.payment_method = cursor.fixed(5);
    let mut tail = Tail::new(cursor.rest());
    segment.additional_information = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for FIPaymentMethodToBeneficiary {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.payment_method, 5);
        ctx.delimited(&self.additional_information, 30);
    }
}

pub(crate) fn fi_additional_fi_to_fi(
    record: &str,
) -> Result<FIAdditionalFIToFI, SegmentDecodeError> {
    check_length(Tag::FIAdditionalFIToFI, record, 8, 222)?;
    let mut cursor = Cursor::new(record);
    let mut segment = FIAdditionalFIToFI::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.additional_fi_to_fi = AdditionalFiToFi {
        line_one: tail.field(),
        line_two: tail.field(),
        line_three: tail.field(),
        line_four: tail.field(),
        line_five: tail.field(),
        line_six: tail.field(),
    };
    Ok(segment)
}

impl EncodeIntoContext for FIAdditionalFIToFI {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.additional_fi_to_fi.line_one, 35);
        ctx.delimited(&self.additional_fi_to_fi.line_two, 35);
        ctx.delimited(&self.additional_fi_to_fi.line_three, 35);
        ctx.delimited(&self.additional_fi_to_fi.line_four, 35);
        ctx.delimited(&self.additional_fi_to_fi.line_five, 35);
        ctx.delimited(&self.additional_fi_to_fi.line_six, 35);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fi_beneficiary_blank_fields_not_included() {
        let mut segment = FIBeneficiary::new();
        segment.fi_to_fi.line_one = "Line One".into();
        segment.fi_to_fi.line_three = "Line Three".into();
        segment.fi_to_fi.line_five = "Line Five".into();

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), "{6400}Line One*Line Three*Line Five*");
    }

    #[test]
    fn test_fi_drawdown_debit_account_advice_round_trip() {
        let line = "{6110}LTRLine One*Line Two*";
        let segment = fi_drawdown_debit_account_advice(line).unwrap();
        assert_eq!(segment.advice.advice_code, "LTR");
        assert_eq!(segment.advice.line_one, "Line One");
        assert_eq!(segment.advice.line_two, "Line Two");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_fi_payment_method_round_trip() {
        let line = "{6420}CHECKCheck Number 12345*";
        let segment = fi_payment_method_to_beneficiary(line).unwrap();
        assert_eq!(segment.payment_method, "CHECK");
        assert_eq!(segment.additional_information, "Check Number 12345");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }
}
