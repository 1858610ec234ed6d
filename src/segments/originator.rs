//! Originator block segments (`{5000}`–`{6000}`).

use fedwire_types::party::{FinancialInstitution, Personal};
use fedwire_types::segments::{
    AccountCreditedDrawdown, InstructingFI, Originator, OriginatorFI, OriginatorOptionF,
    OriginatorToBeneficiary,
};
use fedwire_types::Tag;

use crate::codec::decode::{check_length, SegmentDecodeError};
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};
use crate::segments::beneficiary::{
    encode_financial_institution, encode_personal, parse_party,
};

pub(crate) fn originator(record: &str) -> Result<Originator, SegmentDecodeError> {
    check_length(Tag::Originator, record, 12, 186)?;
    let mut segment = Originator::new();
    let (tag, code, identifier, name, address) = parse_party(record);
    segment.tag = tag;
    segment.personal = Personal {
        identification_code: code,
        identifier,
        name,
        address,
    };
    Ok(segment)
}

impl EncodeIntoContext for Originator {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_personal(ctx, &self.tag, &self.personal);
    }
}

pub(crate) fn originator_option_f(
    record: &str,
) -> Result<OriginatorOptionF, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = OriginatorOptionF::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.party_identifier = tail.field();
    segment.name = tail.field();
    segment.line_one = tail.field();
    segment.line_two = tail.field();
    segment.line_three = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for OriginatorOptionF {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.party_identifier, 35);
        ctx.delimited(&self.name, 35);
        ctx.delimited(&self.line_one, 35);
        ctx.delimited(&self.line_two, 35);
        ctx.delimited(&self.line_three, 35);
    }
}

pub(crate) fn originator_fi(record: &str) -> Result<OriginatorFI, SegmentDecodeError> {
    check_length(Tag::OriginatorFI, record, 12, 186)?;
    let mut segment = OriginatorFI::new();
    let (tag, code, identifier, name, address) = parse_party(record);
    segment.tag = tag;
    segment.financial_institution = FinancialInstitution {
        identification_code: code,
        identifier,
        name,
        address,
    };
    Ok(segment)
}

impl EncodeIntoContext for OriginatorFI {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_financial_institution(ctx, &self.tag, &self.financial_institution);
    }
}

pub(crate) fn instructing_fi(record: &str) -> Result<InstructingFI, SegmentDecodeError> {
    check_length(Tag::InstructingFI, record, 12, 186)?;
    let mut segment = InstructingFI::new();
    let (tag, code, identifier, name, address) = parse_party(record);
    segment.tag = tag;
    segment.financial_institution = FinancialInstitution {
        identification_code: code,
        identifier,
        name,
        address,
    };
    Ok(segment)
}

impl EncodeIntoContext for InstructingFI {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_financial_institution(ctx, &self.tag, &self.financial_institution);
    }
}

pub(crate) fn account_credited_drawdown(
    record: &str,
) -> Result<AccountCreditedDrawdown, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = AccountCreditedDrawdown::new();
    segment.tag = cursor.fixed(6);
    segment.drawdown_credit_account_number = cursor.fixed(9);
    Ok(segment)
}

impl EncodeIntoContext for AccountCreditedDrawdown {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.numeric(&self.drawdown_credit_account_number, 9);
    }
}

pub(crate) fn originator_to_beneficiary(
    record: &str,
) -> Result<OriginatorToBeneficiary, SegmentDecodeError> {
    check_length(Tag::OriginatorToBeneficiary, record, 6, 146)?;
    let mut cursor = Cursor::new(record);
    let mut segment = OriginatorToBeneficiary::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.line_one = tail.field();
    segment.line_two = tail.field();
    segment.line_three = tail.field();
    segment.line_four = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for OriginatorToBeneficiary {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.line_one, 35);
        ctx.delimited(&self.line_two, 35);
        ctx.delimited(&self.line_three, 35);
        ctx.delimited(&self.line_four, 35);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_originator_option_f_round_trip() {
        let line = "{5010}TXID/123-45-6789*1/SMITH JOHN*2/123 MAIN STREET*3/US/NEW YORK*";
        let segment = originator_option_f(line).unwrap();
        assert_eq!(segment.party_identifier, "TXID/123-45-6789");
        assert_eq!(segment.name, "1/SMITH JOHN");
        assert_eq!(segment.line_one, "2/123 MAIN STREET");
        assert_eq!(segment.line_two, "3/US/NEW YORK");
        assert_eq!(segment.line_three, "");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_account_credited_drawdown_round_trip() {
        let segment = account_credited_drawdown("{5400}123456789").unwrap();
        assert_eq!(segment.drawdown_credit_account_number, "123456789");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), "{5400}123456789");
    }

    #[test]
    fn test_originator_to_beneficiary_range() {
        assert!(originator_to_beneficiary("{6000}").is_ok());
        let long = format!("{{6000}}{}*", "A".repeat(141));
        assert!(matches!(
            originator_to_beneficiary(&long).unwrap_err(),
            SegmentDecodeError::TagWrongLength { .. }
        ));
    }
}
