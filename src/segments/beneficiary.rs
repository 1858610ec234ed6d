//! Beneficiary block segments (`{4000}`–`{4400}`).

use fedwire_types::party::{Address, FinancialInstitution, Personal};
use fedwire_types::segments::{
    AccountDebitedDrawdown, Beneficiary, BeneficiaryFI, BeneficiaryIntermediaryFI,
    BeneficiaryReference,
};
use fedwire_types::Tag;

use crate::codec::decode::{check_length, SegmentDecodeError};
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};

/// Parses the `code ‖ identifier * name * address₁ * address₂ * address₃ *`
/// layout shared by the FI routing and party segments.
pub(crate) fn parse_party(record: &str) -> (String, String, String, String, Address) {
    let mut cursor = Cursor::new(record);
    let tag = cursor.fixed(6);
    let identification_code = cursor.fixed(1);
    let mut tail = Tail::new(cursor.rest());
    let identifier = tail.field();
    let name = tail.field();
    let address = Address {
        address_line_one: tail.field(),
        address_line_two: tail.field(),
        address_line_three: tail.field(),
    };
    (tag, identification_code, identifier, name, address)
}

pub(crate) fn encode_financial_institution(ctx: &mut EncodeContext, tag: &str, fi: &FinancialInstitution) {
    ctx.raw(tag);
    ctx.alpha(&fi.identification_code, 1);
    ctx.delimited(&fi.identifier, 34);
    ctx.delimited(&fi.name, 35);
    ctx.delimited(&fi.address.address_line_one, 35);
    ctx.delimited(&fi.address.address_line_two, 35);
    ctx.delimited(&fi.address.address_line_three, 35);
}

pub(crate) fn encode_personal(ctx: &mut EncodeContext, tag: &str, personal: &Personal) {
    ctx.raw(tag);
    ctx.alpha(&personal.identification_code, 1);
    ctx.delimited(&personal.identifier, 34);
    ctx.delimited(&personal.name, 35);
    ctx.delimited(&personal.address.address_line_one, 35);
    ctx.delimited(&personal.address.address_line_two, 35);
    ctx.delimited(&personal.address.address_line_three, 35);
}

pub(crate) fn beneficiary_intermediary_fi(
    record: &str,
) -> Result<BeneficiaryIntermediaryFI, SegmentDecodeError> {
    check_length(Tag::BeneficiaryIntermediaryFI, record, 12, 186)?;
    let mut segment = BeneficiaryIntermediaryFI::new();
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

impl EncodeIntoContext for BeneficiaryIntermediaryFI {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_financial_institution(ctx, &self.tag, &self.financial_institution);
    }
}

pub(crate) fn beneficiary_fi(record: &str) -> Result<BeneficiaryFI, SegmentDecodeError> {
    check_length(Tag::BeneficiaryFI, record, 12, 186)?;
    let mut segment = BeneficiaryFI::new();
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

impl EncodeIntoContext for BeneficiaryFI {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_financial_institution(ctx, &self.tag, &self.financial_institution);
    }
}

pub(crate) fn beneficiary(record: &str) -> Result<Beneficiary, SegmentDecodeError> {
    check_length(Tag::Beneficiary, record, 12, 186)?;
    let mut segment = Beneficiary::new();
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

impl EncodeIntoContext for Beneficiary {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_personal(ctx, &self.tag, &self.personal);
    }
}

pub(crate) fn beneficiary_reference(
    record: &str,
) -> Result<BeneficiaryReference, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = BeneficiaryReference::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.beneficiary_reference = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for BeneficiaryReference {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.beneficiary_reference, 16);
    }
}

pub(crate) fn account_debited_drawdown(
    record: &str,
) -> Result<AccountDebitedDrawdown, SegmentDecodeError> {
    check_length(Tag::AccountDebitedDrawdown, record, 12, 186)?;
    let mut segment = AccountDebitedDrawdown::new();
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

impl EncodeIntoContext for AccountDebitedDrawdown {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        encode_personal(ctx, &self.tag, &self.personal);
    }
}
