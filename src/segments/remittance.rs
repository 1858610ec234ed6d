//! Unstructured addenda and structured remittance segments
//! (`{8200}`–`{8750}`).

use fedwire_types::party::RemittanceData;
use fedwire_types::segments::{
    ActualAmountPaid, Adjustment, AmountNegotiatedDiscount, DateRemittanceDocument,
    GrossAmountRemittanceDocument, PrimaryRemittanceDocument, RelatedRemittance,
    RemittanceBeneficiary, RemittanceFreeText, RemittanceOriginator,
    SecondaryRemittanceDocument, UnstructuredAddenda,
};
use fedwire_types::Tag;

use crate::codec::decode::{check_length, SegmentDecodeError};
use crate::codec::encode::{EncodeContext, EncodeIntoContext};
use crate::fields::{Cursor, Tail};

pub(crate) fn unstructured_addenda(
    record: &str,
) -> Result<UnstructuredAddenda, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = UnstructuredAddenda::new();
    segment.tag = cursor.fixed(6);
    // Preserved byte-for-byte, length prefix and markup included.
    segment.addenda = cursor.rest().to_string();
    Ok(segment)
}

impl EncodeIntoContext for UnstructuredAddenda {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.raw(&self.addenda);
    }
}

/// Parses the name-and-address tail shared by the remittance segments.
/// `with_country_of_residence` covers the segments that carry the extra
/// trailing field.
fn parse_remittance_data(tail: &mut Tail, with_country_of_residence: bool) -> RemittanceData {
    let mut data = RemittanceData {
        address_type: tail.field(),
        department: tail.field(),
        sub_department: tail.field(),
        street_name: tail.field(),
        building_number: tail.field(),
        post_code: tail.field(),
        town_name: tail.field(),
        country_sub_division_state: tail.field(),
        country: tail.field(),
        address_line_one: tail.field(),
        address_line_two: tail.field(),
        address_line_three: tail.field(),
        address_line_four: tail.field(),
        address_line_five: tail.field(),
        address_line_six: tail.field(),
        address_line_seven: tail.field(),
        ..RemittanceData::default()
    };
    if with_country_of_residence {
        data.country_of_residence = tail.field();
    }
    data
}

fn encode_remittance_data(ctx: &mut EncodeContext, data: &RemittanceData) {
    ctx.delimited(&data.address_type, 4);
    ctx.delimited(&data.department, 70);
    ctx.delimited(&data.sub_department, 70);
    ctx.delimited(&data.street_name, 70);
    ctx.delimited(&data.building_number, 16);
    ctx.delimited(&data.post_code, 16);
    ctx.delimited(&data.town_name, 35);
    ctx.delimited(&data.country_sub_division_state, 35);
    ctx.delimited(&data.country, 2);
    ctx.delimited(&data.address_line_one, 70);
    ctx.delimited(&data.address_line_two, 70);
    ctx.delimited(&data.address_line_three, 70);
    ctx.delimited(&data.address_line_four, 70);
    ctx.delimited(&data.address_line_five, 70);
    ctx.delimited(&data.address_line_six, 70);
    ctx.delimited(&data.address_line_seven, 70);
}

pub(crate) fn related_remittance(record: &str) -> Result<RelatedRemittance, SegmentDecodeError> {
    check_length(Tag::RelatedRemittance, record, 7, 3061)?;
    let mut cursor = Cursor::new(record);
    let mut segment = RelatedRemittance::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.remittance_identification = tail.field();
    segment.remittance_location_method = tail.field();
    segment.remittance_location_electronic_address = tail.field();
    let name = tail.field();
    segment.remittance_data = parse_remittance_data(&mut tail, false);
    segment.remittance_data.name = name;
    Ok(segment)
}

impl EncodeIntoContext for RelatedRemittance {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.remittance_identification, 35);
        ctx.delimited(&self.remittance_location_method, 4);
        ctx.delimited(&self.remittance_location_electronic_address, 2048);
        ctx.delimited(&self.remittance_data.name, 140);
        encode_remittance_data(ctx, &self.remittance_data);
    }
}

pub(crate) fn remittance_originator(
    record: &str,
) -> Result<RemittanceOriginator, SegmentDecodeError> {
    check_length(Tag::RemittanceOriginator, record, 14, 3469)?;
    let mut cursor = Cursor::new(record);
    let mut segment = RemittanceOriginator::new();
    segment.tag = cursor.fixed(6);
    segment.identification_type = cursor.fixed(2);
    segment.identification_code = cursor.fixed(4);
    let mut tail = Tail::new(cursor.rest());
    let name = tail.field();
    segment.identification_number = tail.field();
    segment.identification_number_issuer = tail.field();
    let date_birth_place = tail.field();
    segment.remittance_data = parse_remittance_data(&mut tail, true);
    segment.remittance_data.name = name;
    segment.remittance_data.date_birth_place = date_birth_place;
    segment.contact_name = tail.field();
    segment.contact_phone_number = tail.field();
    segment.contact_mobile_number = tail.field();
    segment.contact_fax_number = tail.field();
    segment.contact_electronic_address = tail.field();
    segment.contact_other = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for RemittanceOriginator {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.identification_type, 2);
        ctx.alpha(&self.identification_code, 4);
        ctx.delimited(&self.remittance_data.name, 140);
        ctx.delimited(&self.identification_number, 35);
        ctx.delimited(&self.identification_number_issuer, 35);
        ctx.delimited(&self.remittance_data.date_birth_place, 82);
        encode_remittance_data(ctx, &self.remittance_data);
        ctx.delimited(&self.remittance_data.country_of_residence, 2);
        ctx.delimited(&self.contact_name, 140);
        ctx.delimited(&self.contact_phone_number, 35);
        ctx.delimited(&self.contact_mobile_number, 35);
        ctx.delimited(&self.contact_fax_number, 35);
        ctx.delimited(&self.contact_electronic_address, 2048);
        ctx.delimited(&self.contact_other, 35);
    }
}

pub(crate) fn remittance_beneficiary(
    record: &str,
) -> Result<RemittanceBeneficiary, SegmentDecodeError> {
    check_length(Tag::RemittanceBeneficiary, record, 8, 1137)?;
    let mut cursor = Cursor::new(record);
    let mut segment = RemittanceBeneficiary::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    let name = tail.field();
    segment.identification_type = tail.field();
    segment.identification_code = tail.field();
    segment.identification_number = tail.field();
    segment.identification_number_issuer = tail.field();
    let date_birth_place = tail.field();
    segment.remittance_data = parse_remittance_data(&mut tail, true);
    segment.remittance_data.name = name;
    segment.remittance_data.date_birth_place = date_birth_place;
    Ok(segment)
}

impl EncodeIntoContext for RemittanceBeneficiary {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.remittance_data.name, 140);
        ctx.delimited(&self.identification_type, 2);
        ctx.delimited(&self.identification_code, 4);
        ctx.delimited(&self.identification_number, 35);
        ctx.delimited(&self.identification_number_issuer, 35);
        ctx.delimited(&self.remittance_data.date_birth_place, 82);
        encode_remittance_data(ctx, &self.remittance_data);
        ctx.delimited(&self.remittance_data.country_of_residence, 2);
    }
}

macro_rules! remittance_document_codec {
    ($parse:ident, $ty:ident $(, range = [$min:literal, $max:literal])?) => {
        pub(crate) fn $parse(record: &str) -> Result<$ty, SegmentDecodeError> {
            $(check_length(Tag::$ty, record, $min, $max)?;)?
            let mut cursor = Cursor::new(record);
            let mut segment = <$ty>::new();
            segment.tag = cursor.fixed(6);
            segment.document_type_code = cursor.fixed(4);
            let mut tail = Tail::new(cursor.rest());
            segment.proprietary_document_type_code = tail.field();
            segment.document_identification_number = tail.field();
            segment.issuer = tail.field();
            Ok(segment)
        }

        impl EncodeIntoContext for $ty {
            fn encode_ctx(&self, ctx: &mut EncodeContext) {
                ctx.raw(&self.tag);
                ctx.alpha(&self.document_type_code, 4);
                ctx.delimited(&self.proprietary_document_type_code, 35);
                ctx.delimited(&self.document_identification_number, 35);
                ctx.delimited(&self.issuer, 35);
            }
        }
    };
}

remittance_document_codec!(primary_remittance_document, PrimaryRemittanceDocument, range = [12, 118]);
remittance_document_codec!(secondary_remittance_document, SecondaryRemittanceDocument);

macro_rules! remittance_amount_codec {
    ($parse:ident, $ty:ident) => {
        pub(crate) fn $parse(record: &str) -> Result<$ty, SegmentDecodeError> {
            let mut cursor = Cursor::new(record);
            let mut segment = <$ty>::new();
            segment.tag = cursor.fixed(6);
            segment.remittance_amount.currency_code = cursor.fixed(3);
            let mut tail = Tail::new(cursor.rest());
            segment.remittance_amount.amount = tail.field();
            Ok(segment)
        }

        impl EncodeIntoContext for $ty {
            fn encode_ctx(&self, ctx: &mut EncodeContext) {
                ctx.raw(&self.tag);
                ctx.alpha(&self.remittance_amount.currency_code, 3);
                ctx.delimited(&self.remittance_amount.amount, 19);
            }
        }
    };
}

remittance_amount_codec!(actual_amount_paid, ActualAmountPaid);
remittance_amount_codec!(gross_amount_remittance_document, GrossAmountRemittanceDocument);
remittance_amount_codec!(amount_negotiated_discount, AmountNegotiatedDiscount);

pub(crate) fn adjustment(record: &str) -> Result<Adjustment, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = Adjustment::new();
    segment.tag = cursor.fixed(6);
    segment.adjustment_reason_code = cursor.fixed(2);
    segment.credit_debit_indicator = cursor.fixed(4);
    segment.remittance_amount.currency_code = cursor.fixed(3);
    let mut tail = Tail::new(cursor.rest());
    segment.remittance_amount.amount = tail.field();
    segment.additional_info = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for Adjustment {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.adjustment_reason_code, 2);
        ctx.alpha(&self.credit_debit_indicator, 4);
        ctx.alpha(&self.remittance_amount.currency_code, 3);
        ctx.delimited(&self.remittance_amount.amount, 19);
        ctx.delimited(&self.additional_info, 140);
    }
}

pub(crate) fn date_remittance_document(
    record: &str,
) -> Result<DateRemittanceDocument, SegmentDecodeError> {
    let mut cursor = Cursor::new(record);
    let mut segment = DateRemittanceDocument::new();
    segment.tag = cursor.fixed(6);
    segment.date_remittance_document = cursor.fixed(8);
    Ok(segment)
}

impl EncodeIntoContext for DateRemittanceDocument {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.alpha(&self.date_remittance_document, 8);
    }
}

pub(crate) fn remittance_free_text(
    record: &str,
) -> Result<RemittanceFreeText, SegmentDecodeError> {
    check_length(Tag::RemittanceFreeText, record, 8, 429)?;
    let mut cursor = Cursor::new(record);
    let mut segment = RemittanceFreeText::new();
    segment.tag = cursor.fixed(6);
    let mut tail = Tail::new(cursor.rest());
    segment.line_one = tail.field();
    segment.line_two = tail.field();
    segment.line_three = tail.field();
    Ok(segment)
}

impl EncodeIntoContext for RemittanceFreeText {
    fn encode_ctx(&self, ctx: &mut EncodeContext) {
        ctx.raw(&self.tag);
        ctx.delimited(&self.line_one, 140);
        ctx.delimited(&self.line_two, 140);
        ctx.delimited(&self.line_three, 140);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstructured_addenda_verbatim() {
        let body = "0045<Document xmlns=\"urn:iso\">**markup**</Document>";
        let record = format!("{{8200}}{body}");
        let segment = unstructured_addenda(&record).unwrap();
        assert_eq!(segment.addenda, body);
        assert!(segment.validate().is_ok());

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), record);
    }

    #[test]
    fn test_remittance_originator_round_trip() {
        let line = "{8300}OITXIDOriginator Name*123456789*Issuer Name*";
        let segment = remittance_originator(line).unwrap();
        assert_eq!(segment.identification_type, "OI");
        assert_eq!(segment.identification_code, "TXID");
        assert_eq!(segment.remittance_data.name, "Originator Name");
        assert_eq!(segment.identification_number, "123456789");
        assert_eq!(segment.identification_number_issuer, "Issuer Name");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_remittance_beneficiary_round_trip() {
        let line = "{8350}Beneficiary Name*PI*CCPT*P1234567*Issuer*";
        let segment = remittance_beneficiary(line).unwrap();
        assert_eq!(segment.remittance_data.name, "Beneficiary Name");
        assert_eq!(segment.identification_type, "PI");
        assert_eq!(segment.identification_code, "CCPT");
        assert_eq!(segment.identification_number, "P1234567");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_primary_remittance_document_length() {
        assert!(matches!(
            primary_remittance_document("{8400}CINV*").unwrap_err(),
            SegmentDecodeError::TagWrongLength { .. }
        ));

        let line = "{8400}CINV*Document 1234*Issuer 5678*";
        let segment = primary_remittance_document(line).unwrap();
        assert_eq!(segment.document_type_code, "CINV");
        assert_eq!(segment.proprietary_document_type_code, "");
        assert_eq!(segment.document_identification_number, "Document 1234");
        assert_eq!(segment.issuer, "Issuer 5678");
    }

    #[test]
    fn test_adjustment_round_trip() {
        let line = "{8600}01CRDTUSD100,00*Adjustment Information*";
        let segment = adjustment(line).unwrap();
        assert_eq!(segment.adjustment_reason_code, "01");
        assert_eq!(segment.credit_debit_indicator, "CRDT");
        assert_eq!(segment.remittance_amount.currency_code, "USD");
        assert_eq!(segment.remittance_amount.amount, "100,00");
        assert_eq!(segment.additional_info, "Adjustment Information");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), line);
    }

    #[test]
    fn test_date_remittance_document_round_trip() {
        let segment = date_remittance_document("{8650}20230323").unwrap();
        assert_eq!(segment.date_remittance_document, "20230323");

        let mut ctx = EncodeContext::new();
        segment.encode_ctx(&mut ctx);
        assert_eq!(ctx.finish(), "{8650}20230323");
    }
}
