//! The Fedwire message model and the message-level validation engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FieldError, ValidationError};
use crate::segments::*;

/// A single Fedwire funds-transfer message: at most one segment per tag,
/// owned exclusively by the message.
///
/// Build one by reading a byte stream or programmatically, mutate it
/// freely, then call [`validate`](Self::validate) before writing it out.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FedwireMessage {
    // Appended by the Fed on receipt.
    pub message_disposition: Option<MessageDisposition>,
    pub receipt_time_stamp: Option<ReceiptTimeStamp>,
    pub output_message_accountability_data: Option<OutputMessageAccountabilityData>,
    pub error_wire: Option<ErrorWire>,
    // Mandatory core.
    pub sender_supplied: Option<SenderSupplied>,
    pub type_sub_type: Option<TypeSubType>,
    pub input_message_accountability_data: Option<InputMessageAccountabilityData>,
    pub amount: Option<Amount>,
    pub sender_depository_institution: Option<SenderDepositoryInstitution>,
    pub receiver_depository_institution: Option<ReceiverDepositoryInstitution>,
    pub business_function_code: Option<BusinessFunctionCode>,
    // Other transfer information.
    pub sender_reference: Option<SenderReference>,
    pub previous_message_identifier: Option<PreviousMessageIdentifier>,
    pub local_instrument: Option<LocalInstrument>,
    pub payment_notification: Option<PaymentNotification>,
    pub charges: Option<Charges>,
    pub instructed_amount: Option<InstructedAmount>,
    pub exchange_rate: Option<ExchangeRate>,
    // Beneficiary block.
    pub beneficiary_intermediary_fi: Option<BeneficiaryIntermediaryFI>,
    pub beneficiary_fi: Option<BeneficiaryFI>,
    pub beneficiary: Option<Beneficiary>,
    pub beneficiary_reference: Option<BeneficiaryReference>,
    pub account_debited_drawdown: Option<AccountDebitedDrawdown>,
    // Originator block.
    pub originator: Option<Originator>,
    pub originator_option_f: Option<OriginatorOptionF>,
    pub originator_fi: Option<OriginatorFI>,
    pub instructing_fi: Option<InstructingFI>,
    pub account_credited_drawdown: Option<AccountCreditedDrawdown>,
    pub originator_to_beneficiary: Option<OriginatorToBeneficiary>,
    // FI-to-FI block.
    pub fi_receiver_fi: Option<FIReceiverFI>,
    pub fi_drawdown_debit_account_advice: Option<FIDrawdownDebitAccountAdvice>,
    pub fi_intermediary_fi: Option<FIIntermediaryFI>,
    pub fi_intermediary_fi_advice: Option<FIIntermediaryFIAdvice>,
    pub fi_beneficiary_fi: Option<FIBeneficiaryFI>,
    pub fi_beneficiary_fi_advice: Option<FIBeneficiaryFIAdvice>,
    pub fi_beneficiary: Option<FIBeneficiary>,
    pub fi_beneficiary_advice: Option<FIBeneficiaryAdvice>,
    pub fi_payment_method_to_beneficiary: Option<FIPaymentMethodToBeneficiary>,
    pub fi_additional_fi_to_fi: Option<FIAdditionalFIToFI>,
    // Cover payment block.
    pub currency_instructed_amount: Option<CurrencyInstructedAmount>,
    pub ordering_customer: Option<OrderingCustomer>,
    pub ordering_institution: Option<OrderingInstitution>,
    pub intermediary_institution: Option<IntermediaryInstitution>,
    pub institution_account: Option<InstitutionAccount>,
    pub beneficiary_customer: Option<BeneficiaryCustomer>,
    pub remittance: Option<Remittance>,
    pub sender_to_receiver: Option<SenderToReceiver>,
    // Unstructured addenda.
    pub unstructured_addenda: Option<UnstructuredAddenda>,
    // Structured remittance block.
    pub related_remittance: Option<RelatedRemittance>,
    pub remittance_originator: Option<RemittanceOriginator>,
    pub remittance_beneficiary: Option<RemittanceBeneficiary>,
    pub primary_remittance_document: Option<PrimaryRemittanceDocument>,
    pub actual_amount_paid: Option<ActualAmountPaid>,
    pub gross_amount_remittance_document: Option<GrossAmountRemittanceDocument>,
    pub amount_negotiated_discount: Option<AmountNegotiatedDiscount>,
    pub adjustment: Option<Adjustment>,
    pub date_remittance_document: Option<DateRemittanceDocument>,
    pub secondary_remittance_document: Option<SecondaryRemittanceDocument>,
    pub remittance_free_text: Option<RemittanceFreeText>,
    // Reject/return flows.
    pub service_message: Option<ServiceMessage>,
}

/// Local instrument codes that carry unstructured addenda.
const ADDENDA_LOCAL_INSTRUMENTS: &[&str] = &["ANSI", "GXML", "IXML", "NARR", "S820", "UEDI"];

/// Permitted `type ‖ subtype` pairs per business function code.
fn permitted_type_sub_types(business_function_code: &str) -> &'static [&'static str] {
    match business_function_code {
        "BTR" | "CTR" => &[
            "1000", "1002", "1008", "1500", "1502", "1508", "1600", "1602", "1608",
        ],
        "CTP" => &[
            "1000", "1001", "1002", "1007", "1008", "1500", "1501", "1502", "1507", "1508",
            "1600", "1601", "1602", "1607", "1608",
        ],
        "CKS" | "DEP" | "FFR" | "FFS" => &["1600", "1602", "1608"],
        "DRB" | "DRC" => &["1031", "1033", "1631", "1633"],
        "DRW" => &["1032", "1632"],
        "SVC" => &[
            "1031", "1033", "1090", "1531", "1533", "1590", "1631", "1633", "1690",
        ],
        _ => &[],
    }
}

impl FedwireMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `segment` in its slot, replacing any previous instance of the
    /// same tag.
    pub fn set_segment(&mut self, segment: Segment) {
        match segment {
            Segment::MessageDisposition(s) => self.message_disposition = Some(s),
            Segment::ReceiptTimeStamp(s) => self.receipt_time_stamp = Some(s),
            Segment::OutputMessageAccountabilityData(s) => {
                self.output_message_accountability_data = Some(s)
            }
            Segment::ErrorWire(s) => self.error_wire = Some(s),
            Segment::SenderSupplied(s) => self.sender_supplied = Some(s),
            Segment::TypeSubType(s) => self.type_sub_type = Some(s),
            Segment::InputMessageAccountabilityData(s) => {
                self.input_message_accountability_data = Some(s)
            }
            Segment::Amount(s) => self.amount = Some(s),
            Segment::SenderDepositoryInstitution(s) => {
                self.sender_depository_institution = Some(s)
            }
            Segment::SenderReference(s) => self.sender_reference = Some(s),
            Segment::ReceiverDepositoryInstitution(s) => {
                self.receiver_depository_institution = Some(s)
            }
            Segment::PreviousMessageIdentifier(s) => self.previous_message_identifier = Some(s),
            Segment::BusinessFunctionCode(s) => self.business_function_code = Some(s),
            Segment::LocalInstrument(s) => self.local_instrument = Some(s),
            Segment::PaymentNotification(s) => self.payment_notification = Some(s),
            Segment::Charges(s) => self.charges = Some(s),
            Segment::InstructedAmount(s) => self.instructed_amount = Some(s),
            Segment::ExchangeRate(s) => self.exchange_rate = Some(s),
            Segment::BeneficiaryIntermediaryFI(s) => self.beneficiary_intermediary_fi = Some(s),
            Segment::BeneficiaryFI(s) => self.beneficiary_fi = Some(s),
            Segment::Beneficiary(s) => self.beneficiary = Some(s),
            Segment::BeneficiaryReference(s) => self.beneficiary_reference = Some(s),
            Segment::AccountDebitedDrawdown(s) => self.account_debited_drawdown = Some(s),
            Segment::Originator(s) => self.originator = Some(s),
            Segment::OriginatorOptionF(s) => self.originator_option_f = Some(s),
            Segment::OriginatorFI(s) => self.originator_fi = Some(s),
            Segment::InstructingFI(s) => self.instructing_fi = Some(s),
            Segment::AccountCreditedDrawdown(s) => self.account_credited_drawdown = Some(s),
            Segment::OriginatorToBeneficiary(s) => self.originator_to_beneficiary = Some(s),
            Segment::FIReceiverFI(s) => self.fi_receiver_fi = Some(s),
            Segment::FIDrawdownDebitAccountAdvice(s) => {
                self.fi_drawdown_debit_account_advice = Some(s)
            }
            Segment::FIIntermediaryFI(s) => self.fi_intermediary_fi = Some(s),
            Segment::FIIntermediaryFIAdvice(s) => self.fi_intermediary_fi_advice = Some(s),
            Segment::FIBeneficiaryFI(s) => self.fi_beneficiary_fi = Some(s),
            Segment::FIBeneficiaryFIAdvice(s) => self.fi_beneficiary_fi_advice = Some(s),
            Segment::FIBeneficiary(s) => self.fi_beneficiary = Some(s),
            Segment::FIBeneficiaryAdvice(s) => self.fi_beneficiary_advice = Some(s),
            Segment::FIPaymentMethodToBeneficiary(s) => {
                self.fi_payment_method_to_beneficiary = Some(s)
            }
            Segment::FIAdditionalFIToFI(s) => self.fi_additional_fi_to_fi = Some(s),
            Segment::CurrencyInstructedAmount(s) => self.currency_instructed_amount = Some(s),
            Segment::OrderingCustomer(s) => self.ordering_customer = Some(s),
            Segment::OrderingInstitution(s) => self.ordering_institution = Some(s),
            Segment::IntermediaryInstitution(s) => self.intermediary_institution = Some(s),
            Segment::InstitutionAccount(s) => self.institution_account = Some(s),
            Segment::BeneficiaryCustomer(s) => self.beneficiary_customer = Some(s),
            Segment::Remittance(s) => self.remittance = Some(s),
            Segment::SenderToReceiver(s) => self.sender_to_receiver = Some(s),
            Segment::UnstructuredAddenda(s) => self.unstructured_addenda = Some(s),
            Segment::RelatedRemittance(s) => self.related_remittance = Some(s),
            Segment::RemittanceOriginator(s) => self.remittance_originator = Some(s),
            Segment::RemittanceBeneficiary(s) => self.remittance_beneficiary = Some(s),
            Segment::PrimaryRemittanceDocument(s) => self.primary_remittance_document = Some(s),
            Segment::ActualAmountPaid(s) => self.actual_amount_paid = Some(s),
            Segment::GrossAmountRemittanceDocument(s) => {
                self.gross_amount_remittance_document = Some(s)
            }
            Segment::AmountNegotiatedDiscount(s) => self.amount_negotiated_discount = Some(s),
            Segment::Adjustment(s) => self.adjustment = Some(s),
            Segment::DateRemittanceDocument(s) => self.date_remittance_document = Some(s),
            Segment::SecondaryRemittanceDocument(s) => {
                self.secondary_remittance_document = Some(s)
            }
            Segment::RemittanceFreeText(s) => self.remittance_free_text = Some(s),
            Segment::ServiceMessage(s) => self.service_message = Some(s),
        }
    }

    /// Validates the message: mandatory presence in canonical order, every
    /// present segment individually, then the cross-tag composition rules
    /// for the business function and local instrument codes.
    ///
    /// The first violation wins; `validate` never mutates, so repeated
    /// calls yield the same result.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check_mandatory()?;
        self.validate_segments()?;
        self.check_local_instrument()?;
        self.check_type_sub_type()?;
        self.check_business_function_rules()?;
        Ok(())
    }

    fn check_mandatory(&self) -> Result<(), ValidationError> {
        for (field, present) in [
            ("SenderSupplied", self.sender_supplied.is_some()),
            ("TypeSubType", self.type_sub_type.is_some()),
            (
                "InputMessageAccountabilityData",
                self.input_message_accountability_data.is_some(),
            ),
            ("Amount", self.amount.is_some()),
            (
                "SenderDepositoryInstitution",
                self.sender_depository_institution.is_some(),
            ),
            (
                "ReceiverDepositoryInstitution",
                self.receiver_depository_institution.is_some(),
            ),
            ("BusinessFunctionCode", self.business_function_code.is_some()),
        ] {
            if !present {
                return Err(FieldError::required(field).into());
            }
        }
        Ok(())
    }

    fn validate_segments(&self) -> Result<(), ValidationError> {
        for segment in self.present_segments() {
            segment.validate()?;
        }
        Ok(())
    }

    /// The present segments, in the writer's canonical order.
    fn present_segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        macro_rules! push {
            ($($slot:ident,)*) => {
                $(
                    if let Some(segment) = &self.$slot {
                        segments.push(Segment::from(segment.clone()));
                    }
                )*
            };
        }
        push! {
            message_disposition,
            receipt_time_stamp,
            output_message_accountability_data,
            error_wire,
            sender_supplied,
            type_sub_type,
            input_message_accountability_data,
            amount,
            sender_depository_institution,
            receiver_depository_institution,
            business_function_code,
            sender_reference,
            previous_message_identifier,
            local_instrument,
            payment_notification,
            charges,
            instructed_amount,
            exchange_rate,
            beneficiary_intermediary_fi,
            beneficiary_fi,
            beneficiary,
            beneficiary_reference,
            account_debited_drawdown,
            originator,
            originator_option_f,
            originator_fi,
            instructing_fi,
            account_credited_drawdown,
            originator_to_beneficiary,
            fi_receiver_fi,
            fi_drawdown_debit_account_advice,
            fi_intermediary_fi,
            fi_intermediary_fi_advice,
            fi_beneficiary_fi,
            fi_beneficiary_fi_advice,
            fi_beneficiary,
            fi_beneficiary_advice,
            fi_payment_method_to_beneficiary,
            fi_additional_fi_to_fi,
            currency_instructed_amount,
            ordering_customer,
            ordering_institution,
            intermediary_institution,
            institution_account,
            beneficiary_customer,
            remittance,
            sender_to_receiver,
            unstructured_addenda,
            related_remittance,
            remittance_originator,
            remittance_beneficiary,
            primary_remittance_document,
            actual_amount_paid,
            gross_amount_remittance_document,
            amount_negotiated_discount,
            adjustment,
            date_remittance_document,
            secondary_remittance_document,
            remittance_free_text,
            service_message,
        }
        segments
    }

    fn bfc(&self) -> &str {
        self.business_function_code
            .as_ref()
            .map(|segment| segment.business_function_code.as_str())
            .unwrap_or("")
    }

    fn local_instrument_code(&self) -> &str {
        self.local_instrument
            .as_ref()
            .map(|segment| segment.local_instrument_code.as_str())
            .unwrap_or("")
    }

    /// `LocalInstrument` rides only on Customer Transfer Plus.
    fn check_local_instrument(&self) -> Result<(), ValidationError> {
        if self.local_instrument.is_some() && self.bfc() != "CTP" {
            return Err(FieldError::new(
                "LocalInstrument",
                ErrorKind::LocalInstrumentNotPermitted,
                self.local_instrument_code(),
            )
            .into());
        }
        Ok(())
    }

    /// The pairwise `TypeSubType` × `BusinessFunctionCode` table.
    fn check_type_sub_type(&self) -> Result<(), ValidationError> {
        let (Some(type_sub_type), Some(bfc)) =
            (&self.type_sub_type, &self.business_function_code)
        else {
            return Ok(());
        };
        let pair = type_sub_type.type_sub_type();
        if !permitted_type_sub_types(&bfc.business_function_code).contains(&pair.as_str()) {
            return Err(ValidationError::InvalidPropertyForProperty {
                property: "TypeSubType",
                property_value: pair,
                second_property: "BusinessFunctionCode",
                second_property_value: bfc.business_function_code.clone(),
            });
        }
        Ok(())
    }

    fn not_permitted_for_bfc(
        &self,
        property: &'static str,
        present: bool,
        permitted: bool,
    ) -> Result<(), ValidationError> {
        if present && !permitted {
            return Err(ValidationError::BusinessFunctionCodeProperty {
                property,
                property_value: "present".into(),
                business_function_code: self.bfc().into(),
            });
        }
        Ok(())
    }

    fn check_business_function_rules(&self) -> Result<(), ValidationError> {
        let bfc = self.bfc();
        let local_instrument = self.local_instrument_code();
        let customer_transfer = matches!(bfc, "CTR" | "CTP");
        let drawdown = matches!(bfc, "DRB" | "DRC" | "DRW");
        let cover = bfc == "CTP" && local_instrument == "COVS";
        let structured_remittance = bfc == "CTP" && local_instrument == "RMTS";

        // Beneficiary and Originator are mandatory for customer transfers.
        if customer_transfer {
            if self.beneficiary.is_none() {
                return Err(FieldError::required("Beneficiary").into());
            }
            if self.originator.is_none() && self.originator_option_f.is_none() {
                return Err(FieldError::required("Originator").into());
            }
        }

        self.not_permitted_for_bfc(
            "OriginatorOptionF",
            self.originator_option_f.is_some(),
            bfc == "CTP",
        )?;
        self.not_permitted_for_bfc("Charges", self.charges.is_some(), customer_transfer)?;
        self.not_permitted_for_bfc(
            "InstructedAmount",
            self.instructed_amount.is_some(),
            customer_transfer,
        )?;
        self.not_permitted_for_bfc(
            "ExchangeRate",
            self.exchange_rate.is_some(),
            customer_transfer,
        )?;
        if self.exchange_rate.is_some() && self.instructed_amount.is_none() {
            return Err(FieldError::required("InstructedAmount").into());
        }

        // Cover payment segments ride only on CTP + COVS.
        for (property, present) in [
            (
                "CurrencyInstructedAmount",
                self.currency_instructed_amount.is_some(),
            ),
            ("OrderingCustomer", self.ordering_customer.is_some()),
            ("OrderingInstitution", self.ordering_institution.is_some()),
            (
                "IntermediaryInstitution",
                self.intermediary_institution.is_some(),
            ),
            ("InstitutionAccount", self.institution_account.is_some()),
            ("BeneficiaryCustomer", self.beneficiary_customer.is_some()),
            ("Remittance", self.remittance.is_some()),
            ("SenderToReceiver", self.sender_to_receiver.is_some()),
        ] {
            if present && !cover {
                return Err(ValidationError::InvalidPropertyForProperty {
                    property,
                    property_value: "present".into(),
                    second_property: "LocalInstrumentCode",
                    second_property_value: local_instrument.into(),
                });
            }
        }

        self.not_permitted_for_bfc(
            "UnstructuredAddenda",
            self.unstructured_addenda.is_some(),
            bfc == "CTP" && ADDENDA_LOCAL_INSTRUMENTS.contains(&local_instrument),
        )?;
        self.not_permitted_for_bfc(
            "RelatedRemittance",
            self.related_remittance.is_some(),
            bfc == "CTP" && local_instrument == "RRMT",
        )?;

        for (property, present) in [
            (
                "RemittanceOriginator",
                self.remittance_originator.is_some(),
            ),
            (
                "RemittanceBeneficiary",
                self.remittance_beneficiary.is_some(),
            ),
            (
                "PrimaryRemittanceDocument",
                self.primary_remittance_document.is_some(),
            ),
            ("ActualAmountPaid", self.actual_amount_paid.is_some()),
            (
                "GrossAmountRemittanceDocument",
                self.gross_amount_remittance_document.is_some(),
            ),
            (
                "AmountNegotiatedDiscount",
                self.amount_negotiated_discount.is_some(),
            ),
            ("Adjustment", self.adjustment.is_some()),
            (
                "DateRemittanceDocument",
                self.date_remittance_document.is_some(),
            ),
            (
                "SecondaryRemittanceDocument",
                self.secondary_remittance_document.is_some(),
            ),
            ("RemittanceFreeText", self.remittance_free_text.is_some()),
        ] {
            if present && !structured_remittance {
                return Err(ValidationError::InvalidPropertyForProperty {
                    property,
                    property_value: "present".into(),
                    second_property: "LocalInstrumentCode",
                    second_property_value: local_instrument.into(),
                });
            }
        }

        self.not_permitted_for_bfc(
            "AccountDebitedDrawdown",
            self.account_debited_drawdown.is_some(),
            drawdown,
        )?;
        self.not_permitted_for_bfc(
            "AccountCreditedDrawdown",
            self.account_credited_drawdown.is_some(),
            drawdown,
        )?;
        self.not_permitted_for_bfc(
            "ServiceMessage",
            self.service_message.is_some(),
            bfc == "SVC",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn mock_customer_transfer() -> FedwireMessage {
        let mut message = FedwireMessage::new();
        message.sender_supplied = Some(SenderSupplied::new());

        let mut type_sub_type = TypeSubType::new();
        type_sub_type.type_code = "10".into();
        type_sub_type.sub_type_code = "00".into();
        message.type_sub_type = Some(type_sub_type);

        let mut imad = InputMessageAccountabilityData::new();
        imad.input_cycle_date = "20230323".into();
        imad.input_source = "SOURCE01".into();
        imad.input_sequence_number = "000001".into();
        message.input_message_accountability_data = Some(imad);

        let mut amount = Amount::new();
        amount.amount = "000000001234".into();
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
        bfc.business_function_code = "CTR".into();
        message.business_function_code = Some(bfc);

        let mut beneficiary = Beneficiary::new();
        beneficiary.personal.identification_code = "D".into();
        beneficiary.personal.identifier = "1234".into();
        beneficiary.personal.name = "Beneficiary Name".into();
        message.beneficiary = Some(beneficiary);

        let mut originator = Originator::new();
        originator.personal.identification_code = "D".into();
        originator.personal.identifier = "5678".into();
        originator.personal.name = "Originator Name".into();
        message.originator = Some(originator);

        message
    }

    #[test]
    fn test_mock_customer_transfer_validates() {
        assert!(mock_customer_transfer().validate().is_ok());
    }

    #[test]
    fn test_mandatory_presence_in_canonical_order() {
        let mut message = mock_customer_transfer();
        message.amount = None;
        message.sender_supplied = None;
        // SenderSupplied comes first in canonical order.
        assert_eq!(
            message.validate().unwrap_err(),
            ValidationError::from(FieldError::required("SenderSupplied"))
        );
    }

    #[test]
    fn test_local_instrument_requires_ctp() {
        let mut message = mock_customer_transfer();
        let mut local_instrument = LocalInstrument::new();
        local_instrument.local_instrument_code = "ANSI".into();
        message.local_instrument = Some(local_instrument);
        assert!(matches!(
            message.validate().unwrap_err(),
            ValidationError::Field(FieldError {
                kind: ErrorKind::LocalInstrumentNotPermitted,
                ..
            })
        ));
    }

    #[test]
    fn test_type_sub_type_for_bfc() {
        let mut message = mock_customer_transfer();
        message.type_sub_type.as_mut().unwrap().sub_type_code = "31".into();
        assert_eq!(
            message.validate().unwrap_err(),
            ValidationError::InvalidPropertyForProperty {
                property: "TypeSubType",
                property_value: "1031".into(),
                second_property: "BusinessFunctionCode",
                second_property_value: "CTR".into(),
            }
        );
    }

    #[test]
    fn test_cover_payment_requires_covs() {
        let mut message = mock_customer_transfer();
        let mut ordering_customer = OrderingCustomer::new();
        ordering_customer.cover_payment.swift_line_one = "Line One".into();
        message.ordering_customer = Some(ordering_customer);
        assert!(matches!(
            message.validate().unwrap_err(),
            ValidationError::InvalidPropertyForProperty { property: "OrderingCustomer", .. }
        ));
    }

    #[test]
    fn test_service_message_requires_svc() {
        let mut message = mock_customer_transfer();
        let mut service_message = ServiceMessage::new();
        service_message.line_one = "Line One".into();
        message.service_message = Some(service_message);
        assert!(matches!(
            message.validate().unwrap_err(),
            ValidationError::BusinessFunctionCodeProperty { property: "ServiceMessage", .. }
        ));
    }

    #[test]
    fn test_invalid_segment_surfaces() {
        let mut message = mock_customer_transfer();
        message.beneficiary.as_mut().unwrap().personal.name = "®".into();
        assert!(matches!(
            message.validate().unwrap_err(),
            ValidationError::Field(FieldError {
                kind: ErrorKind::NonAlphanumeric,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let message = mock_customer_transfer();
        let first = message.validate();
        let second = message.validate();
        assert_eq!(first, second);
    }
}
