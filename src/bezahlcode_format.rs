//! Bezahlcode QR payment-code extraction.
//!
//! Bezahlcode (<http://www.bezahlcode.de>) encodes payment data as a
//! `bank://` URL whose percent-encoded query parameters carry the payment
//! fields. An unparseable URL yields empty parameters, not an error.

use std::collections::HashMap;

use url::Url;

use crate::iban;
use crate::types::{normalize_amount, PaymentParameters};

/// Extract payment parameters from a Bezahlcode `bank://` payload.
pub fn extract_parameters(scanned: &str) -> PaymentParameters {
    let mut parameters = PaymentParameters::default();

    let url = match Url::parse(scanned) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("unparseable Bezahlcode URL: {}", err);
            return parameters;
        }
    };

    let query: HashMap<String, String> = url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if let Some(bic) = query.get("bic") {
        parameters.bic = Some(bic.clone());
    }
    if let Some(recipient) = query.get("name") {
        parameters.payment_recipient = Some(recipient.clone());
    }
    if let Some(candidate) = query.get("iban") {
        if iban::is_valid(candidate) {
            parameters.iban = Some(candidate.clone());
        } else {
            log::warn!("dropping invalid IBAN from Bezahlcode payload");
        }
    }
    // Older Bezahlcode generators emit "reason1" instead of "reason".
    if let Some(reference) = query.get("reason").or_else(|| query.get("reason1")) {
        parameters.payment_reference = Some(reference.clone());
    }
    if let Some(amount) = query.get("amount") {
        parameters.amount_to_pay = normalize_amount(amount, query.get("currency").map(String::as_str));
    }

    parameters
}
