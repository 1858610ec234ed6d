//! Service Message `{9000}`.

use fedwire_types::segments::ServiceMessage;

use crate::codec::decode::SegmentDecodeError;
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};

pub(crate) fn service_message(record: &str) -> Result<ServiceMessage, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = ServiceMessage::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.line_one = tail.field();
    segment.line_two = tail.field();
    segment.line_three = tail.field();
    segment.line_four = tail.field();
    segment.line_five = tail.field();
    segment.line_six = tail.field();
    segment.line_seven = tail.field();
    segment.line_eight = tail.field();
    segment.line_nine = tail.field();
    segment.line_ten = tail.field();
    segment.line_eleven = tail.field();
    segment.line_twelve = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for ServiceMessage {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.line_one, 35);
        ctx.delimited(&self.line_two, 35);
        ctx.delimited(&self.line_three, 35);
        ctx.delimited(&self.line_four, 35);
        ctx.delimited(&self.line_five, 35);
        ctx.delimited(&self.line_six, 35);
        ctx.delimited(&self.line_seven, 35);
        ctx.delimited(&self.line_eight, 35);
        ctx.delimited(&self.line_nine, 35);
        ctx.delimited(&self.line_ten, 35);
        ctx.delimited(&self.line_eleven, 35);
        ctx.delimited(&self.line_twelve, 35);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_round_trip() {
        let line = "{9000}Sender ABA 121042882*Ref XYZ*Return of payment*";
        let segment = service_message(line).unwrap();
        assert_eq!(segment.line_one, "Sender ABA 121042882");
        assert_eq!(segment.line_two, "Ref XYZ");
        assert_eq!(segment.line_three, "Return of payment");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_service_message_trims_then_delimits() {
        let mut segment = ServiceMessage::new();
        segment.line_one = format!("Padded line{}X", " ".repeat(30));

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        // Truncated to 35, trimmed, one terminator.
        assert_eq!(ctx.finish(), "{9000}Padded line*");
    }
}
