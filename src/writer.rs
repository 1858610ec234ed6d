//! Stream-level message writer.

use std::io::Write;

use fedwire_types::{FedwireMessage, ValidationError};
use log::debug;
use thiserror::Error;

use crate::codec::encode::{EncodeContext, EncodeIntoContext};

/// Writes validated Fedwire messages to a byte sink in canonical segment
/// order, one message per line.
///
/// Writing is gated by [`FedwireMessage::validate`]: a message that fails
/// validation (a missing mandatory segment included) is never partially
/// emitted.
#[derive(Debug)]
pub struct Writer<W> {
    sink: W,
}

/// Error during stream writing.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The message failed validation before emission.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Validates `message`, emits its present segments back-to-back in
    /// canonical order, terminates the line, and flushes once.
    pub fn write_message(&mut self, message: &FedwireMessage) -> Result<(), WriteError> {
        message.validate()?;

        let mut ctx = EncodeContext::new();
        write_fed_appended(&mut ctx, message);
        write_mandatory(&mut ctx, message);
        write_other_transfer_info(&mut ctx, message);
        write_beneficiary(&mut ctx, message);
        write_originator(&mut ctx, message);
        write_financial_institution(&mut ctx, message);
        write_cover_payment(&mut ctx, message);
        put(&mut ctx, &message.unstructured_addenda);
        write_remittance(&mut ctx, message);
        put(&mut ctx, &message.service_message);

        let line = ctx.finish();
        debug!("writing message of {} characters", line.chars().count());
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }

    /// The underlying sink, for callers that need to interleave output.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn put<T: EncodeIntoContext>(ctx: &mut EncodeContext, slot: &Option<T>) {
    if let Some(segment) = slot {
        segment.encode_ctx(ctx);
    }
}

fn write_fed_appended(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.message_disposition);
    put(ctx, &message.receipt_time_stamp);
    put(ctx, &message.output_message_accountability_data);
    put(ctx, &message.error_wire);
}

fn write_mandatory(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.sender_supplied);
    put(ctx, &message.type_sub_type);
    put(ctx, &message.input_message_accountability_data);
    put(ctx, &message.amount);
    put(ctx, &message.sender_depository_institution);
    put(ctx, &message.receiver_depository_institution);
    put(ctx, &message.business_function_code);
}

fn write_other_transfer_info(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.sender_reference);
    put(ctx, &message.previous_message_identifier);
    put(ctx, &message.local_instrument);
    put(ctx, &message.payment_notification);
    put(ctx, &message.charges);
    put(ctx, &message.instructed_amount);
    put(ctx, &message.exchange_rate);
}

fn write_beneficiary(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.beneficiary_intermediary_fi);
    put(ctx, &message.beneficiary_fi);
    put(ctx, &message.beneficiary);
    put(ctx, &message.beneficiary_reference);
    put(ctx, &message.account_debited_drawdown);
}

fn write_originator(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.originator);
    put(ctx, &message.originator_option_f);
    put(ctx, &message.originator_fi);
    put(ctx, &message.instructing_fi);
    put(ctx, &message.account_credited_drawdown);
    put(ctx, &message.originator_to_beneficiary);
}

fn write_financial_institution(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.fi_receiver_fi);
    put(ctx, &message.fi_drawdown_debit_account_advice);
    put(ctx, &message.fi_intermediary_fi);
    put(ctx, &message.fi_intermediary_fi_advice);
    put(ctx, &message.fi_beneficiary_fi);
    put(ctx, &message.fi_beneficiary_fi_advice);
    put(ctx, &message.fi_beneficiary);
    put(ctx, &message.fi_beneficiary_advice);
    put(ctx, &message.fi_payment_method_to_beneficiary);
    put(ctx, &message.fi_additional_fi_to_fi);
}

fn write_cover_payment(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.currency_instructed_amount);
    put(ctx, &message.ordering_customer);
    put(ctx, &message.ordering_institution);
    put(ctx, &message.intermediary_institution);
    put(ctx, &message.institution_account);
    put(ctx, &message.beneficiary_customer);
    put(ctx, &message.remittance);
    put(ctx, &message.sender_to_receiver);
}

fn write_remittance(ctx: &mut EncodeContext, message: &FedwireMessage) {
    put(ctx, &message.related_remittance);
    put(ctx, &message.remittance_originator);
    put(ctx, &message.remittance_beneficiary);
    put(ctx, &message.primary_remittance_document);
    put(ctx, &message.actual_amount_paid);
    put(ctx, &message.gross_amount_remittance_document);
    put(ctx, &message.amount_negotiated_discount);
    put(ctx, &message.adjustment);
    put(ctx, &message.date_remittance_document);
    put(ctx, &message.secondary_remittance_document);
    put(ctx, &message.remittance_free_text);
}

#[cfg(test)]
mod tests {
    use fedwire_types::segments::SenderSupplied;
    use fedwire_types::{ErrorKind, FieldError};

    use super::*;

    #[test]
    fn test_missing_mandatory_names_first_offender() {
        let mut message = FedwireMessage::new();
        message.sender_supplied = Some(SenderSupplied::new());

        let mut writer = Writer::new(Vec::new());
        let err = writer.write_message(&message).unwrap_err();
        match err {
            WriteError::Validation(ValidationError::Field(field_error)) => {
                assert_eq!(field_error, FieldError::required("TypeSubType"));
                assert_eq!(field_error.kind, ErrorKind::FieldRequired);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        // Nothing was emitted.
        assert!(writer.into_inner().is_empty());
    }
}
