//! Reader/writer integration: a validated message survives
//! `read(write(m))` unchanged, and the writer emits the canonical segment
//! order.

use fedwire_codec::types::segments::*;
use fedwire_codec::types::FedwireMessage;
use fedwire_codec::{Reader, Writer};

fn mandatory_core(business_function_code: &str, type_sub_type_pair: (&str, &str)) -> FedwireMessage {
    let mut message = FedwireMessage::new();
    message.sender_supplied = Some(SenderSupplied::new());

    let mut tst = TypeSubType::new();
    tst.type_code = type_sub_type_pair.0.into();
    tst.sub_type_code = type_sub_type_pair.1.into();
    message.type_sub_type = Some(tst);

    let mut imad = InputMessageAccountabilityData::new();
    imad.input_cycle_date = "20230323".into();
    imad.input_source = "SOURCE01".into();
    imad.input_sequence_number = "000001".into();
    message.input_message_accountability_data = Some(imad);

    let mut amount = Amount::new();
    amount.amount = "000000123456".into();
    message.amount = Some(amount);

    let mut sender = SenderDepositoryInstitution::new();
    sender.sender_aba_number = "121042882".into();
    sender.sender_short_name = "Sender Bank".into();
    message.sender_depository_institution = Some(sender);

    let mut receiver = ReceiverDepositoryInstitution::new();
    receiver.receiver_aba_number = "231380104".into();
    receiver.receiver_short_name = "Receiver Bank".into();
    message.receiver_depository_institution = Some(receiver);

    let mut bfc = BusinessFunctionCode::new();
    bfc.business_function_code = business_function_code.into();
    message.business_function_code = Some(bfc);

    message
}

fn mock_customer_transfer_plus() -> FedwireMessage {
    let mut message = mandatory_core("CTP", ("10", "00"));

    let mut local_instrument = LocalInstrument::new();
    local_instrument.local_instrument_code = "RMTS".into();
    message.local_instrument = Some(local_instrument);

    let mut beneficiary = Beneficiary::new();
    beneficiary.personal.identification_code = "D".into();
    beneficiary.personal.identifier = "12345678".into();
    beneficiary.personal.name = "Beneficiary Name".into();
    message.beneficiary = Some(beneficiary);

    let mut originator = Originator::new();
    originator.personal.identification_code = "D".into();
    originator.personal.identifier = "87654321".into();
    originator.personal.name = "Originator Name".into();
    message.originator = Some(originator);

    let mut remittance_originator = RemittanceOriginator::new();
    remittance_originator.identification_type = "OI".into();
    remittance_originator.identification_code = "TXID".into();
    remittance_originator.identification_number = "123456789".into();
    remittance_originator.remittance_data.name = "Remit Originator".into();
    message.remittance_originator = Some(remittance_originator);

    let mut remittance_beneficiary = RemittanceBeneficiary::new();
    remittance_beneficiary.remittance_data.name = "Remit Beneficiary".into();
    remittance_beneficiary.identification_type = "OI".into();
    remittance_beneficiary.identification_code = "BANK".into();
    remittance_beneficiary.identification_number = "987654321".into();
    message.remittance_beneficiary = Some(remittance_beneficiary);

    let mut document = PrimaryRemittanceDocument::new();
    document.document_type_code = "CINV".into();
    document.document_identification_number = "Document 1234".into();
    message.primary_remittance_document = Some(document);

    let mut free_text = RemittanceFreeText::new();
    free_text.line_one = "Payment for invoice 1234".into();
    message.remittance_free_text = Some(free_text);

    message
}

fn write_to_string(message: &FedwireMessage) -> String {
    let mut writer = Writer::new(Vec::new());
    writer.write_message(message).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn test_read_write_inverse() {
    let message = mock_customer_transfer_plus();
    assert!(message.validate().is_ok());

    let wire = write_to_string(&message);
    let mut reader = Reader::new(wire.as_bytes());
    let read_back = reader.read_message().unwrap().unwrap();

    assert_eq!(message, read_back);
    assert!(read_back.validate().is_ok());
    assert!(reader.read_message().unwrap().is_none());
}

#[test]
fn test_writer_emits_canonical_order() {
    let wire = write_to_string(&mock_customer_transfer_plus());

    let expected_order = [
        "{1500}", "{1510}", "{1520}", "{2000}", "{3100}", "{3400}", "{3600}", "{3610}",
        "{4200}", "{5000}", "{8300}", "{8350}", "{8400}", "{8750}",
    ];
    let positions: Vec<usize> = expected_order
        .iter()
        .map(|tag| wire.find(tag).unwrap_or_else(|| panic!("{tag} missing from {wire}")))
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "segments out of canonical order in {wire}"
    );
}

#[test]
fn test_absent_segments_not_emitted() {
    let wire = write_to_string(&mock_customer_transfer_plus());
    for tag in ["{1100}", "{3700}", "{6400}", "{7050}", "{8200}", "{9000}"] {
        assert!(!wire.contains(tag), "{tag} unexpectedly present in {wire}");
    }
}

#[test]
fn test_service_message_flow_round_trips() {
    let mut message = mandatory_core("SVC", ("10", "90"));

    let mut service_message = ServiceMessage::new();
    service_message.line_one = "Refer to sender reference XYZ".into();
    message.service_message = Some(service_message);

    let wire = write_to_string(&message);
    assert!(wire.contains("{9000}Refer to sender reference XYZ*"));

    let read_back = Reader::new(wire.as_bytes()).read_message().unwrap().unwrap();
    assert_eq!(message, read_back);
}

#[test]
fn test_two_messages_two_lines() {
    let first = mock_customer_transfer_plus();
    let mut sink = Writer::new(Vec::new());
    sink.write_message(&first).unwrap();
    sink.write_message(&first).unwrap();
    let wire = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(wire.lines().count(), 2);

    let mut reader = Reader::new(wire.as_bytes());
    assert_eq!(reader.read_message().unwrap().unwrap(), first);
    assert_eq!(reader.read_message().unwrap().unwrap(), first);
    assert!(reader.read_message().unwrap().is_none());
}

#[test]
fn test_invalid_message_never_partially_written() {
    let mut message = mock_customer_transfer_plus();
    message.beneficiary.as_mut().unwrap().personal.name = "®".into();

    let mut writer = Writer::new(Vec::new());
    assert!(writer.write_message(&message).is_err());
    assert!(writer.into_inner().is_empty());
}
