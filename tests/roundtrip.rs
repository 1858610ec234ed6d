//! Generator-driven round-trip properties over the per-tag codecs.
//!
//! For a validated segment in canonical form (no populated field after a
//! blank one, amounts at full width), `parse(emit(x)) = x`. For arbitrary
//! sparse values the canonical form is a fixed point: re-encoding what was
//! parsed reproduces the first encoding exactly.

use fedwire_codec::decode::Decoder;
use fedwire_codec::encode::Encoder;
use fedwire_codec::types::party::CoverPayment;
use fedwire_codec::types::segments::*;
use fedwire_codec::types::Segment;
use fedwire_codec::SegmentCodec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-,.()/'&?: ";
const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CHF", "MXN"];
const IDENTIFICATION_CODES: &[&str] = &["B", "C", "D", "F", "U"];

/// A non-empty alphanumeric value with no leading or trailing spaces, so
/// it survives the parse-side trim unchanged.
fn alphanumeric_value(rng: &mut SmallRng, max: usize) -> String {
    let len = rng.gen_range(1..=max.min(20));
    let mut value: String = (0..len)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char)
        .collect();
    value = value.trim().to_string();
    if value.is_empty() {
        value.push('X');
    }
    value
}

fn assert_strict_round_trip(segment: Segment) {
    assert!(segment.validate().is_ok(), "generator broke validation");

    let encoded = SegmentCodec.encode(&segment).dump();
    assert!(!encoded.contains("**"), "delimiter run survived in {encoded:?}");

    let (rest, reparsed) = SegmentCodec.decode(&encoded).unwrap();
    assert!(rest.is_empty());
    assert_eq!(segment, reparsed, "wire form was {encoded:?}");
}

fn assert_canonical_fixed_point(segment: Segment) {
    let first = SegmentCodec.encode(&segment).dump();
    let (_, reparsed) = SegmentCodec.decode(&first).unwrap();
    let second = SegmentCodec.encode(&reparsed).dump();
    assert_eq!(first, second, "canonical form is not a fixed point");
}

#[test]
fn test_fi_beneficiary_strict_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0x6400);
    for _ in 0..200 {
        let mut segment = FIBeneficiary::new();
        segment.fi_to_fi.line_one = alphanumeric_value(&mut rng, 30);
        segment.fi_to_fi.line_two = alphanumeric_value(&mut rng, 33);
        segment.fi_to_fi.line_three = alphanumeric_value(&mut rng, 33);
        assert_strict_round_trip(segment.into());
    }
}

#[test]
fn test_fi_beneficiary_sparse_values_normalize() {
    let mut rng = SmallRng::seed_from_u64(0x6401);
    for _ in 0..200 {
        let mut segment = FIBeneficiary::new();
        for (index, line) in [
            &mut segment.fi_to_fi.line_one,
            &mut segment.fi_to_fi.line_two,
            &mut segment.fi_to_fi.line_three,
            &mut segment.fi_to_fi.line_four,
            &mut segment.fi_to_fi.line_five,
            &mut segment.fi_to_fi.line_six,
        ]
        .into_iter()
        .enumerate()
        {
            if rng.gen_bool(0.5) {
                *line = alphanumeric_value(&mut rng, if index == 0 { 30 } else { 33 });
            }
        }
        assert_canonical_fixed_point(segment.into());
    }
}

#[test]
fn test_beneficiary_intermediary_fi_strict_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0x4000);
    for _ in 0..200 {
        let mut segment = BeneficiaryIntermediaryFI::new();
        let code = IDENTIFICATION_CODES[rng.gen_range(0..IDENTIFICATION_CODES.len())];
        segment.financial_institution.identification_code = code.into();
        segment.financial_institution.identifier = alphanumeric_value(&mut rng, 34);
        segment.financial_institution.name = alphanumeric_value(&mut rng, 35);
        segment.financial_institution.address.address_line_one =
            alphanumeric_value(&mut rng, 35);
        assert_strict_round_trip(segment.into());
    }
}

#[test]
fn test_currency_instructed_amount_strict_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0x7033);
    for _ in 0..200 {
        let mut segment = CurrencyInstructedAmount::new();
        segment.swift_field_tag = alphanumeric_value(&mut rng, 5);
        segment.currency_code = CURRENCIES[rng.gen_range(0..CURRENCIES.len())].into();
        // Canonical amounts are already at emit width.
        let cents = rng.gen_range(0u64..=99);
        segment.amount = format!("{:0>12},{cents:02}", rng.gen_range(0u64..1_000_000));
        assert_strict_round_trip(segment.into());
    }
}

#[test]
fn test_sender_to_receiver_strict_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0x7072);
    for _ in 0..200 {
        let mut segment = SenderToReceiver::new();
        segment.cover_payment = CoverPayment {
            swift_field_tag: alphanumeric_value(&mut rng, 5),
            swift_line_one: alphanumeric_value(&mut rng, 35),
            swift_line_two: alphanumeric_value(&mut rng, 35),
            swift_line_three: alphanumeric_value(&mut rng, 35),
            swift_line_four: alphanumeric_value(&mut rng, 35),
            swift_line_five: alphanumeric_value(&mut rng, 35),
            swift_line_six: alphanumeric_value(&mut rng, 35),
        };
        assert_strict_round_trip(segment.into());
    }
}

#[test]
fn test_remittance_free_text_strict_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0x8750);
    for _ in 0..200 {
        let mut segment = RemittanceFreeText::new();
        segment.line_one = alphanumeric_value(&mut rng, 140);
        segment.line_two = alphanumeric_value(&mut rng, 140);
        segment.line_three = alphanumeric_value(&mut rng, 140);
        assert_strict_round_trip(segment.into());
    }
}

#[test]
fn test_service_message_sparse_values_normalize() {
    let mut rng = SmallRng::seed_from_u64(0x9000);
    for _ in 0..200 {
        let mut segment = ServiceMessage::new();
        segment.line_one = alphanumeric_value(&mut rng, 35);
        if rng.gen_bool(0.5) {
            segment.line_three = alphanumeric_value(&mut rng, 35);
        }
        if rng.gen_bool(0.3) {
            segment.line_nine = alphanumeric_value(&mut rng, 35);
        }
        assert!(segment.validate().is_ok());
        assert_canonical_fixed_point(segment.into());
    }
}

#[test]
fn test_remittance_beneficiary_strict_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0x8350);
    for _ in 0..100 {
        let mut segment = RemittanceBeneficiary::new();
        segment.remittance_data.name = alphanumeric_value(&mut rng, 140);
        segment.identification_type = "OI".into();
        segment.identification_code = "BANK".into();
        segment.identification_number = alphanumeric_value(&mut rng, 35);
        segment.identification_number_issuer = alphanumeric_value(&mut rng, 35);
        assert_strict_round_trip(segment.into());
    }
}

#[test]
fn test_absent_segments_absent_from_output() {
    let mut segment = Charges::new();
    segment.charge_details = "B".into();
    segment.senders_charges_one = "USD123,45".into();

    let encoded = SegmentCodec.encode(&Segment::from(segment)).dump();
    assert!(encoded.starts_with("{3700}"));
    assert!(!encoded.contains("{3710}"));
    assert!(!encoded.contains("**"));
}
