//! Mandatory core segments (`{1500}`–`{3600}`).

use fedwire_types::segments::{
    Amount, BusinessFunctionCode, InputMessageAccountabilityData,
    ReceiverDepositoryInstitution, SenderDepositoryInstitution, SenderSupplied, TypeSubType,
};
use fedwire_types::Tag;

use crate::codec::decode::{check_length, SegmentDecodeError};
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};

pub(crate) fn sender_supplied(record: &str) -> Result<SenderSupplied, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = SenderSupplied::new();
    segment.tag = cursor.fixed(6);
    segment.format_version = cursor.fixed(2);
    segment.user_request_correlation = cursor.fixed(8);
    segment.test_production_code = cursor.fixed(1);
    segment.message_duplication_code = cursor.fixed(1);
    Ok(segment)
}

impl EncodeIntoContext for SenderSupplied {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.format_version, 2);
        ctx.alpha(&self.user_request_correlation, 8);
        ctx.alpha(&self.test_production_code, 1);
        ctx.alpha(&self.message_duplication_code, 1);
    }
}

pub(crate) fn type_sub_type(record: &str) -> Result<TypeSubType, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = TypeSubType::new();
    segment.tag = cursor.fixed(6);
    segment.type_code = cursor.fixed(2);
    segment.sub_type_code = cursor.fixed(2);
    Ok(segment)
}

impl EncodeIntoContext for TypeSubType {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.type_code, 2);
        ctx.alpha(&self.sub_type_code, 2);
    }
}

pub(crate) fn input_message_accountability_data(
    record: &str,
) -> Result<InputMessageAccountabilityData, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = InputMessageAccountabilityData::new();
    segment.tag = cursor.fixed(6);
    segment.input_cycle_date = cursor.fixed(8);
    segment.input_source = cursor.fixed(8);
    segment.input_sequence_number = cursor.fixed(6);
    Ok(segment)
}

impl EncodeIntoContext for InputMessageAccountabilityData {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.input_cycle_date, 8);
        ctx.alpha(&self.input_source, 8);
        ctx.numeric(&self.input_sequence_number, 6);
    }
}

pub(crate) fn amount(record: &str) -> Result<Amount, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = Amount::new();
    segment.tag = cursor.fixed(6);
    segment.amount = cursor.fixed(12);
    Ok(segment)
}

impl EncodeIntoContext for Amount {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.numeric(&self.amount, 12);
    }
}

pub(crate) fn sender_depository_institution(
    record: &str,
) -> Result<SenderDepositoryInstitution, SegmentDecodeError> {
    check_length(Tag::SenderDepositoryInstitution, record, 15, 33)?;
    let mut cursor = Cursor::new(record);
    let mut segment = SenderDepositoryInstitution::new();
    segment.tag = cursor.fixed(6);
    segment.sender_aba_number = cursor.fixed(9);
    segment.sender_short_name = cursor.fixed(18);
    Ok(segment)
}

impl EncodeIntoContext for SenderDepositoryInstitution {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.numeric(&self.sender_aba_number, 9);
        ctx.alpha(&self.sender_short_name, 18);
    }
}

pub(crate) fn receiver_depository_institution(
    record: &str,
) -> Result<ReceiverDepositoryInstitution, SegmentDecodeError> {
    check_length(Tag::ReceiverDepositoryInstitution, record, 15, 33)?;
    let mut cursor = Cursor::new(record);
    let mut segment = ReceiverDepositoryInstitution::new();
    segment.tag = cursor.fixed(6);
    segment.receiver_aba_number = cursor.fixed(9);
    segment.receiver_short_name = cursor.fixed(18);
    Ok(segment)
}

impl EncodeIntoContext for ReceiverDepositoryInstitution {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.numeric(&self.receiver_aba_number, 9);
        ctx.alpha(&self.receiver_short_name, 18);
    }
}

pub(crate) fn business_function_code(
    record: &str,
) -> Result<BusinessFunctionCode, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = BusinessFunctionCode::new();
    segment.tag = cursor.fixed(6);
    segment.business_function_code = cursor.fixed(3);
    let mut tail = Tail::new(cursor.rest());
    segment.transaction_type_code = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for BusinessFunctionCode {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.business_function_code, 3);
        ctx.delimited(&self.transaction_type_code, 3);
    }
}
