//! The closed set of Fedwire tags.

use std::fmt::{Display, Formatter};

macro_rules! tags {
    ($($variant:ident => $literal:literal,)*) => {
        /// A six-character `{NNNN}` segment identifier.
        ///
        /// Tags form a closed enumeration; anything else on the wire is an
        /// invalid tag.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum Tag {
            $($variant,)*
        }

        impl Tag {
            /// The `{NNNN}` literal as it appears on the wire.
            pub fn literal(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)*
                }
            }

            /// Looks up a six-character literal in the tag table.
            pub fn from_literal(literal: &str) -> Option<Self> {
                match literal {
                    $($literal => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

tags! {
    MessageDisposition => "{1100}",
    ReceiptTimeStamp => "{1110}",
    OutputMessageAccountabilityData => "{1120}",
    ErrorWire => "{1130}",
    SenderSupplied => "{1500}",
    TypeSubType => "{1510}",
    InputMessageAccountabilityData => "{1520}",
    Amount => "{2000}",
    SenderDepositoryInstitution => "{3100}",
    SenderReference => "{3320}",
    ReceiverDepositoryInstitution => "{3400}",
    PreviousMessageIdentifier => "{3500}",
    BusinessFunctionCode => "{3600}",
    LocalInstrument => "{3610}",
    PaymentNotification => "{3620}",
    Charges => "{3700}",
    InstructedAmount => "{3710}",
    ExchangeRate => "{3720}",
    BeneficiaryIntermediaryFI => "{4000}",
    BeneficiaryFI => "{4100}",
    Beneficiary => "{4200}",
    BeneficiaryReference => "{4320}",
    AccountDebitedDrawdown => "{4400}",
    Originator => "{5000}",
    OriginatorOptionF => "{5010}",
    OriginatorFI => "{5100}",
    InstructingFI => "{5200}",
    AccountCreditedDrawdown => "{5400}",
    OriginatorToBeneficiary => "{6000}",
    FIReceiverFI => "{6100}",
    FIDrawdownDebitAccountAdvice => "{6110}",
    FIIntermediaryFI => "{6200}",
    FIIntermediaryFIAdvice => "{6210}",
    FIBeneficiaryFI => "{6300}",
    FIBeneficiaryFIAdvice => "{6310}",
    FIBeneficiary => "{6400}",
    FIBeneficiaryAdvice => "{6410}",
    FIPaymentMethodToBeneficiary => "{6420}",
    FIAdditionalFIToFI => "{6500}",
    CurrencyInstructedAmount => "{7033}",
    OrderingCustomer => "{7050}",
    OrderingInstitution => "{7052}",
    IntermediaryInstitution => "{7056}",
    InstitutionAccount => "{7057}",
    BeneficiaryCustomer => "{7059}",
    Remittance => "{7070}",
    SenderToReceiver => "{7072}",
    UnstructuredAddenda => "{8200}",
    RelatedRemittance => "{8250}",
    RemittanceOriginator => "{8300}",
    RemittanceBeneficiary => "{8350}",
    PrimaryRemittanceDocument => "{8400}",
    ActualAmountPaid => "{8450}",
    GrossAmountRemittanceDocument => "{8500}",
    AmountNegotiatedDiscount => "{8550}",
    Adjustment => "{8600}",
    DateRemittanceDocument => "{8650}",
    SecondaryRemittanceDocument => "{8700}",
    RemittanceFreeText => "{8750}",
    ServiceMessage => "{9000}",
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}
