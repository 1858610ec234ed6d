//! Fed-appended prefix segments (`{1100}`–`{1130}`).

use fedwire_types::segments::{
    ErrorWire, MessageDisposition, OutputMessageAccountabilityData, ReceiptTimeStamp,
};

use crate::codec::decode::SegmentDecodeError;
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};

pub(crate) fn message_disposition(
    record: &str,
) -> Result<MessageDisposition, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = MessageDisposition::new();
    segment.tag = cursor.fixed(6);
    segment.format_version = cursor.fixed(2);
    segment.test_production_code = cursor.fixed(1);
    segment.message_duplication_code = cursor.fixed(1);
    segment.message_status_indicator = cursor.fixed(1);
    Ok(segment)
}

impl EncodeIntoContext for MessageDisposition {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.format_version, 2);
        ctx.alpha(&self.test_production_code, 1);
        ctx.alpha(&self.message_duplication_code, 1);
        ctx.alpha(&self.message_status_indicator, 1);
    }
}

pub(crate) fn receipt_time_stamp(record: &str) -> Result<ReceiptTimeStamp, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = ReceiptTimeStamp::new();
    segment.tag = cursor.fixed(6);
    segment.receipt_date = cursor.fixed(4);
    segment.receipt_time = cursor.fixed(4);
    segment.receipt_application_identification = cursor.fixed(4);
    Ok(segment)
}

impl EncodeIntoContext for ReceiptTimeStamp {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.receipt_date, 4);
        ctx.alpha(&self.receipt_time, 4);
        ctx.alpha(&self.receipt_application_identification, 4);
    }
}

pub(crate) fn output_message_accountability_data(
    record: &str,
) -> Result<OutputMessageAccountabilityData, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = OutputMessageAccountabilityData::new();
    segment.tag = cursor.fixed(6);
    segment.output_cycle_date = cursor.fixed(8);
    segment.output_destination_id = cursor.fixed(8);
    segment.output_sequence_number = cursor.fixed(6);
    segment.output_date = cursor.fixed(4);
    segment.output_time = cursor.fixed(4);
    segment.output_frb_application_identification = cursor.fixed(4);
    Ok(segment)
}

impl EncodeIntoContext for OutputMessageAccountabilityData {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.output_cycle_date, 8);
        ctx.alpha(&self.output_destination_id, 8);
        ctx.numeric(&self.output_sequence_number, 6);
        ctx.alpha(&self.output_date, 4);
        ctx.alpha(&self.output_time, 4);
        ctx.alpha(&self.output_frb_application_identification, 4);
    }
}

pub(crate) fn error_wire(record: &str) -> Result<ErrorWire, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = ErrorWire::new();
    segment.tag = cursor.fixed(6);
    segment.error_category = cursor.fixed(1);
    segment.error_code = cursor.fixed(3);
    let mut tail = Tail::new(cursor.rest());
    segment.error_description = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for ErrorWire {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.error_category, 1);
        ctx.alpha(&self.error_code, 3);
        ctx.delimited(&self.error_description, 35);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wire_round_trip() {
        let line = "{1130}1XYZINVLD CYCLE DT/MISSING/INVLD {1520}*";
        let segment = error_wire(line).unwrap();
        assert_eq!(segment.error_category, "1");
        assert_eq!(segment.error_code, "XYZ");
        assert_eq!(segment.error_description, "INVLD CYCLE DT/MISSING/INVLD {1520}");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_error_wire_empty_description() {
        let line = "{1130}1XYZ*";
        let segment = error_wire(line).unwrap();
        assert_eq!(segment.error_category, "1");
        assert_eq!(segment.error_code, "XYZ");
        assert_eq!(segment.error_description, "");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_message_disposition_round_trip() {
        let segment = message_disposition("{1100}30P N").unwrap();
        assert_eq!(segment.format_version, "30");
        assert_eq!(segment.test_production_code, "P");
        assert_eq!(segment.message_duplication_code, "");
        assert_eq!(segment.message_status_indicator, "N");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), "{1100}30P N");
    }
}
