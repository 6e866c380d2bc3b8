//! EPC069-12 QR payment-code extraction.
//!
//! EPC069-12 (GiroCode / Stuzza) is the European Payments Council layout for
//! SEPA credit-transfer QR codes: a fixed sequence of 12 newline-separated
//! fields. This module reads the payment-relevant lines by position.

use crate::iban;
use crate::types::{normalize_amount, PaymentParameters};

/// Number of newline-separated fields in an EPC069-12 payload.
pub const EPC069_12_LINE_COUNT: usize = 12;

// Positions per the EPC069-12 layout (0-indexed).
const BIC_LINE: usize = 4;
const RECIPIENT_LINE: usize = 5;
const IBAN_LINE: usize = 6;
const AMOUNT_LINE: usize = 7;
const REFERENCE_LINE: usize = 9;

/// Extract payment parameters from an EPC069-12 payload.
///
/// Empty lines leave the corresponding field unset; an IBAN candidate that
/// fails validation is dropped rather than reported.
pub fn extract_parameters(scanned: &str) -> PaymentParameters {
    let lines: Vec<&str> = scanned.split('\n').collect();
    let mut parameters = PaymentParameters::default();

    let line = |index: usize| lines.get(index).copied().filter(|line| !line.is_empty());

    if let Some(bic) = line(BIC_LINE) {
        parameters.bic = Some(bic.to_string());
    }
    if let Some(recipient) = line(RECIPIENT_LINE) {
        parameters.payment_recipient = Some(recipient.to_string());
    }
    if let Some(reference) = line(REFERENCE_LINE) {
        parameters.payment_reference = Some(reference.to_string());
    }

    if let Some(candidate) = line(IBAN_LINE) {
        if iban::is_valid(candidate) {
            parameters.iban = Some(candidate.to_string());
        } else {
            log::warn!("dropping invalid IBAN from EPC069-12 payload");
        }
    }

    // The currency is embedded in the amount line itself ("EUR1456.89").
    if let Some(amount) = line(AMOUNT_LINE) {
        parameters.amount_to_pay = normalize_amount(amount, None);
    }

    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_all_fields() {
        let scanned = "BCD\n001\n2\nSCT\nGENODEF1KIL\nMax Mustermann\n\
                       DE52210900070088299309\nEUR1456.89\n\n457845789452\n\n\
                       Diverse Autoteile, Re 789452 KN 457845";
        let parameters = extract_parameters(scanned);

        assert_eq!(parameters.bic.as_deref(), Some("GENODEF1KIL"));
        assert_eq!(parameters.payment_recipient.as_deref(), Some("Max Mustermann"));
        assert_eq!(parameters.iban.as_deref(), Some("DE52210900070088299309"));
        assert_eq!(parameters.payment_reference.as_deref(), Some("457845789452"));
        assert_eq!(parameters.amount_to_pay.as_deref(), Some("1456.89:EUR"));
    }

    #[test]
    fn test_invalid_iban_is_omitted() {
        let scanned = "BCD\n001\n2\nSCT\nTESTBIC\nRecipient\nDE00INVALID\nEUR5.00\n\nRef\n\n";
        let parameters = extract_parameters(scanned);

        assert_eq!(parameters.iban, None);
        assert_eq!(parameters.bic.as_deref(), Some("TESTBIC"));
        assert_eq!(parameters.amount_to_pay.as_deref(), Some("5.00:EUR"));
    }

    #[test]
    fn test_empty_lines_leave_fields_unset() {
        let scanned = "BCD\n001\n2\nSCT\n\n\n\n\n\n\n\n";
        let parameters = extract_parameters(scanned);
        assert!(parameters.is_empty());
    }

    #[test]
    fn test_amount_without_currency_prefix_is_omitted() {
        let scanned = "BCD\n001\n2\nSCT\nTESTBIC\nRecipient\n\n42.00\n\nRef\n\n";
        let parameters = extract_parameters(scanned);
        assert_eq!(parameters.amount_to_pay, None);
    }
}
