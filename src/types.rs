//! Common types shared by the QR payment-code formats.

use serde::{Deserialize, Serialize};

/// Payment parameters extracted from a scanned QR payment code.
///
/// Fields that could not be extracted (absent, or present but failing their
/// local parsing rule) are `None` and are omitted from the serialized form;
/// keys are never serialized as null. The `iban` field is populated only
/// when the candidate string passed [`crate::iban::is_valid`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentParameters {
    /// Bank identifier code of the recipient's bank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,

    /// Name of the payment recipient.
    #[serde(rename = "paymentRecipient", skip_serializing_if = "Option::is_none")]
    pub payment_recipient: Option<String>,

    /// Validated recipient IBAN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,

    /// Payment purpose / remittance reference.
    #[serde(rename = "paymentReference", skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,

    /// Normalized amount in `"<quantity>:<currency>"` form.
    #[serde(rename = "amountToPay", skip_serializing_if = "Option::is_none")]
    pub amount_to_pay: Option<String>,
}

impl PaymentParameters {
    /// True when no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.bic.is_none()
            && self.payment_recipient.is_none()
            && self.iban.is_none()
            && self.payment_reference.is_none()
            && self.amount_to_pay.is_none()
    }
}

/// Normalize an amount string into `"<quantity>:<currency>"` form.
///
/// EPC069-12 embeds the currency as a three-letter prefix of the amount
/// field (`"EUR12.50"`); Bezahlcode carries it in a separate `currency`
/// query parameter. When neither form supplies a currency the amount is
/// unusable and `None` is returned.
pub(crate) fn normalize_amount(amount: &str, currency: Option<&str>) -> Option<String> {
    let prefix_is_currency =
        amount.len() >= 3 && amount.is_char_boundary(3) && amount[..3].bytes().all(|b| b.is_ascii_alphabetic());

    if prefix_is_currency {
        let (currency, quantity) = amount.split_at(3);
        Some(format!("{}:{}", quantity, currency))
    } else if let Some(currency) = currency {
        Some(format!("{}:{}", amount, currency))
    } else {
        None
    }
}
