//! JSON surface tests.
//!
//! Segments serialize with camelCase keys, never include the tag, and
//! restore the implicit tag constant on deserialization. Unknown keys are
//! ignored.

#![cfg(feature = "serde")]

use fedwire_types::segments::{
    BeneficiaryIntermediaryFI, CurrencyInstructedAmount, SenderSupplied, ServiceMessage,
};
use fedwire_types::FedwireMessage;

#[test]
fn test_tag_restored_when_absent() {
    let cia: CurrencyInstructedAmount = serde_json::from_str(
        r#"{"swiftFieldTag":"Swift","currencyCode":"USD","amount":"1500,49"}"#,
    )
    .unwrap();

    assert_eq!(cia.tag, "{7033}");
    assert_eq!(cia.currency_code, "USD");
    assert!(cia.validate().is_ok());
}

#[test]
fn test_tag_never_serialized() {
    let mut ss = SenderSupplied::new();
    ss.user_request_correlation = "CORR".into();

    let json = serde_json::to_string(&ss).unwrap();
    assert!(!json.contains("tag"));
    assert!(json.contains("\"userRequestCorrelation\":\"CORR\""));
}

#[test]
fn test_unknown_keys_ignored() {
    let sm: ServiceMessage = serde_json::from_str(
        r#"{"lineOne":"Line One","somethingElse":"ignored","nested":{"a":1}}"#,
    )
    .unwrap();

    assert_eq!(sm.line_one, "Line One");
    assert!(sm.validate().is_ok());
}

#[test]
fn test_tag_key_in_input_is_ignored() {
    // A hostile "tag" key cannot displace the constant.
    let cia: CurrencyInstructedAmount =
        serde_json::from_str(r#"{"tag":"{9999}","amount":"1500,49"}"#).unwrap();
    assert_eq!(cia.tag, "{7033}");
}

#[test]
fn test_nested_composites_round_trip() {
    let mut bifi = BeneficiaryIntermediaryFI::new();
    bifi.financial_institution.identification_code = "B".into();
    bifi.financial_institution.identifier = "BANKUS33".into();
    bifi.financial_institution.name = "Bank Name".into();
    bifi.financial_institution.address.address_line_one = "Address One".into();

    let json = serde_json::to_string(&bifi).unwrap();
    let decoded: BeneficiaryIntermediaryFI = serde_json::from_str(&json).unwrap();
    assert_eq!(bifi, decoded);
}

#[test]
fn test_message_round_trip() {
    let mut message = FedwireMessage::new();
    message.sender_supplied = Some(SenderSupplied::new());

    let json = serde_json::to_string(&message).unwrap();
    let decoded: FedwireMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(message, decoded);
    assert_eq!(decoded.sender_supplied.unwrap().tag, "{1500}");
}
