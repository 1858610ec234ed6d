//! One plain data record per tag segment, grouped by message block.
//!
//! Records hold trimmed field values as owned strings. Parsing and emission
//! live in the codec crate; this crate owns the shapes and the validation
//! rules. Each record's `validate` returns the first violation and stops.

use crate::error::{ErrorKind, FieldError};
use crate::tag::Tag;

pub mod beneficiary;
pub mod cover_payment;
pub mod fed_appended;
pub mod fi_to_fi;
pub mod mandatory;
pub mod originator;
pub mod remittance;
pub mod service_message;
pub mod transfer_info;

pub use beneficiary::{
    AccountDebitedDrawdown, Beneficiary, BeneficiaryFI, BeneficiaryIntermediaryFI,
    BeneficiaryReference,
};
pub use cover_payment::{
    BeneficiaryCustomer, CurrencyInstructedAmount, InstitutionAccount, IntermediaryInstitution,
    OrderingCustomer, OrderingInstitution, Remittance, SenderToReceiver,
};
pub use fed_appended::{
    ErrorWire, MessageDisposition, OutputMessageAccountabilityData, ReceiptTimeStamp,
};
pub use fi_to_fi::{
    FIAdditionalFIToFI, FIBeneficiary, FIBeneficiaryAdvice, FIBeneficiaryFI,
    FIBeneficiaryFIAdvice, FIDrawdownDebitAccountAdvice, FIIntermediaryFI, FIIntermediaryFIAdvice,
    FIPaymentMethodToBeneficiary, FIReceiverFI,
};
pub use mandatory::{
    Amount, BusinessFunctionCode, InputMessageAccountabilityData,
    ReceiverDepositoryInstitution, SenderDepositoryInstitution, SenderSupplied, TypeSubType,
};
pub use originator::{
    AccountCreditedDrawdown, InstructingFI, Originator, OriginatorFI, OriginatorOptionF,
    OriginatorToBeneficiary,
};
pub use remittance::{
    ActualAmountPaid, Adjustment, AmountNegotiatedDiscount, DateRemittanceDocument,
    GrossAmountRemittanceDocument, PrimaryRemittanceDocument, RelatedRemittance,
    RemittanceBeneficiary, RemittanceFreeText, RemittanceOriginator,
    SecondaryRemittanceDocument, UnstructuredAddenda,
};
pub use service_message::ServiceMessage;
pub use transfer_info::{
    Charges, ExchangeRate, InstructedAmount, LocalInstrument, PaymentNotification,
    PreviousMessageIdentifier, SenderReference,
};

/// Confirms the record's tag slot still holds the tag constant of its type.
pub(crate) fn expect_tag(tag: &str, expected: Tag) -> Result<(), FieldError> {
    if tag == expected.literal() {
        Ok(())
    } else {
        Err(FieldError::new("tag", ErrorKind::ValidTagForType, tag))
    }
}

/// Default functions restoring the implicit tag constant on deserialization.
#[cfg(feature = "serde")]
pub(crate) mod defaults {
    use crate::tag::Tag;

    macro_rules! tag_defaults {
        ($($fn_name:ident => $variant:ident,)*) => {
            $(
                pub(crate) fn $fn_name() -> String {
                    Tag::$variant.literal().to_string()
                }
            )*
        };
    }

    tag_defaults! {
        message_disposition => MessageDisposition,
        receipt_time_stamp => ReceiptTimeStamp,
        output_message_accountability_data => OutputMessageAccountabilityData,
        error_wire => ErrorWire,
        sender_supplied => SenderSupplied,
        type_sub_type => TypeSubType,
        input_message_accountability_data => InputMessageAccountabilityData,
        amount => Amount,
        sender_depository_institution => SenderDepositoryInstitution,
        sender_reference => SenderReference,
        receiver_depository_institution => ReceiverDepositoryInstitution,
        previous_message_identifier => PreviousMessageIdentifier,
        business_function_code => BusinessFunctionCode,
        local_instrument => LocalInstrument,
        payment_notification => PaymentNotification,
        charges => Charges,
        instructed_amount => InstructedAmount,
        exchange_rate => ExchangeRate,
        beneficiary_intermediary_fi => BeneficiaryIntermediaryFI,
        beneficiary_fi => BeneficiaryFI,
        beneficiary => Beneficiary,
        beneficiary_reference => BeneficiaryReference,
        account_debited_drawdown => AccountDebitedDrawdown,
        originator => Originator,
        originator_option_f => OriginatorOptionF,
        originator_fi => OriginatorFI,
        instructing_fi => InstructingFI,
        account_credited_drawdown => AccountCreditedDrawdown,
        originator_to_beneficiary => OriginatorToBeneficiary,
        fi_receiver_fi => FIReceiverFI,
        fi_drawdown_debit_account_advice => FIDrawdownDebitAccountAdvice,
        fi_intermediary_fi => FIIntermediaryFI,
        fi_intermediary_fi_advice => FIIntermediaryFIAdvice,
        fi_beneficiary_fi => FIBeneficiaryFI,
        fi_beneficiary_fi_advice => FIBeneficiaryFIAdvice,
        fi_beneficiary => FIBeneficiary,
        fi_beneficiary_advice => FIBeneficiaryAdvice,
        fi_payment_method_to_beneficiary => FIPaymentMethodToBeneficiary,
        fi_additional_fi_to_fi => FIAdditionalFIToFI,
        currency_instructed_amount => CurrencyInstructedAmount,
        ordering_customer => OrderingCustomer,
        ordering_institution => OrderingInstitution,
        intermediary_institution => IntermediaryInstitution,
        institution_account => InstitutionAccount,
        beneficiary_customer => BeneficiaryCustomer,
        remittance => Remittance,
        sender_to_receiver => SenderToReceiver,
        unstructured_addenda => UnstructuredAddenda,
        related_remittance => RelatedRemittance,
        remittance_originator => RemittanceOriginator,
        remittance_beneficiary => RemittanceBeneficiary,
        primary_remittance_document => PrimaryRemittanceDocument,
        actual_amount_paid => ActualAmountPaid,
        gross_amount_remittance_document => GrossAmountRemittanceDocument,
        amount_negotiated_discount => AmountNegotiatedDiscount,
        adjustment => Adjustment,
        date_remittance_document => DateRemittanceDocument,
        secondary_remittance_document => SecondaryRemittanceDocument,
        remittance_free_text => RemittanceFreeText,
        service_message => ServiceMessage,
    }
}

macro_rules! segments {
    ($($variant:ident,)*) => {
        /// A parsed segment of any tag type.
        ///
        /// The variant constructor table doubles as the reader's dispatch:
        /// the six-character literal selects the variant, the variant
        /// selects the parser.
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub enum Segment {
            $($variant($variant),)*
        }

        impl Segment {
            /// The tag this segment carries data for.
            pub fn tag(&self) -> Tag {
                match self {
                    $(Self::$variant(_) => Tag::$variant,)*
                }
            }

            /// Validates the inner record.
            pub fn validate(&self) -> Result<(), FieldError> {
                match self {
                    $(Self::$variant(inner) => inner.validate(),)*
                }
            }
        }

        $(
            impl From<$variant> for Segment {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

segments! {
    MessageDisposition,
    ReceiptTimeStamp,
    OutputMessageAccountabilityData,
    ErrorWire,
    SenderSupplied,
    TypeSubType,
    InputMessageAccountabilityData,
    Amount,
    SenderDepositoryInstitution,
    SenderReference,
    ReceiverDepositoryInstitution,
    PreviousMessageIdentifier,
    BusinessFunctionCode,
    LocalInstrument,
    PaymentNotification,
    Charges,
    InstructedAmount,
    ExchangeRate,
    BeneficiaryIntermediaryFI,
    BeneficiaryFI,
    Beneficiary,
    BeneficiaryReference,
    AccountDebitedDrawdown,
    Originator,
    OriginatorOptionF,
    OriginatorFI,
    InstructingFI,
    AccountCreditedDrawdown,
    OriginatorToBeneficiary,
    FIReceiverFI,
    FIDrawdownDebitAccountAdvice,
    FIIntermediaryFI,
    FIIntermediaryFIAdvice,
    FIBeneficiaryFI,
    FIBeneficiaryFIAdvice,
    FIBeneficiary,
    FIBeneficiaryAdvice,
    FIPaymentMethodToBeneficiary,
    FIAdditionalFIToFI,
    CurrencyInstructedAmount,
    OrderingCustomer,
    OrderingInstitution,
    IntermediaryInstitution,
    InstitutionAccount,
    BeneficiaryCustomer,
    Remittance,
    SenderToReceiver,
    UnstructuredAddenda,
    RelatedRemittance,
    RemittanceOriginator,
    RemittanceBeneficiary,
    PrimaryRemittanceDocument,
    ActualAmountPaid,
    GrossAmountRemittanceDocument,
    AmountNegotiatedDiscount,
    Adjustment,
    DateRemittanceDocument,
    SecondaryRemittanceDocument,
    RemittanceFreeText,
    ServiceMessage,
}
