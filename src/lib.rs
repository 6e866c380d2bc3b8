//! QR Payment Code Library
//!
//! A library for classifying scanned QR payment-code strings, extracting
//! structured payment parameters, and validating IBANs.
//!
//! # Supported Formats
//!
//! - **EPC069-12**: the European Payments Council SEPA credit-transfer
//!   layout (GiroCode / Stuzza), 12 newline-separated fields
//! - **Bezahlcode**: the German `bank://` URL scheme with payment fields
//!   as query parameters
//!
//! # Features
//!
//! - Detect the payment-code format of a scanned string
//! - Extract BIC, recipient, IBAN, reference, and amount fields
//! - Validate IBANs per ISO 13616 / ISO 7064 mod-97
//! - Produce a JSON payment-data payload for prefill consumers
//!
//! # Examples
//!
//! ## Extracting payment data from a scanned string
//!
//! ```
//! use qrpay::QrCodeDocument;
//!
//! let scanned = "bank://singlepayment?name=Muster%20Online%20Shop\
//!                &iban=DE89370400440532013000&amount=47%2C65&currency=EUR";
//! let document = QrCodeDocument::new(scanned);
//! document.check_type()?;
//!
//! let parameters = document.parameters();
//! assert_eq!(parameters.payment_recipient.as_deref(), Some("Muster Online Shop"));
//! assert_eq!(parameters.amount_to_pay.as_deref(), Some("47,65:EUR"));
//! # Ok::<(), qrpay::Error>(())
//! ```
//!
//! ## Validating an IBAN
//!
//! ```
//! assert!(qrpay::iban::is_valid("DE89 3704 0044 0532 0130 00"));
//! assert!(!qrpay::iban::is_valid("DE8937040044053201300"));
//! ```

pub mod bezahlcode_format;
pub mod document;
pub mod epc069_format;
pub mod error;
pub mod iban;
pub mod logging;
pub mod types;

use std::str::FromStr;

// Re-export commonly used types
pub use document::QrCodeDocument;
pub use error::{Error, Result};
pub use types::PaymentParameters;

/// Supported QR payment-code formats.
///
/// "Unrecognized" is not a variant; detection returns `None` for strings
/// matching neither layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrCodeFormat {
    /// EPC069-12 twelve-line SEPA credit-transfer layout.
    Epc06912,
    /// Bezahlcode `bank://` URL scheme.
    Bezahlcode,
}

impl QrCodeFormat {
    /// Detect the payment-code format of a scanned string.
    ///
    /// The `bank://` prefix check runs first; the 12-line check is only
    /// evaluated when the prefix does not match.
    pub fn detect(scanned: &str) -> Option<QrCodeFormat> {
        if scanned.starts_with("bank://") {
            Some(QrCodeFormat::Bezahlcode)
        } else if scanned.split('\n').count() == epc069_format::EPC069_12_LINE_COUNT {
            Some(QrCodeFormat::Epc06912)
        } else {
            None
        }
    }

    /// Human-readable format name.
    pub fn name(&self) -> &'static str {
        match self {
            QrCodeFormat::Epc06912 => "EPC069-12",
            QrCodeFormat::Bezahlcode => "Bezahlcode",
        }
    }
}

impl FromStr for QrCodeFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "epc069-12" | "epc06912" | "epc" | "girocode" => Ok(QrCodeFormat::Epc06912),
            "bezahlcode" | "bezahl" | "bank" => Ok(QrCodeFormat::Bezahlcode),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_bezahlcode() {
        assert_eq!(
            QrCodeFormat::detect("bank://singlepayment?amount=1"),
            Some(QrCodeFormat::Bezahlcode)
        );
    }

    #[test]
    fn test_detect_epc069_12() {
        let twelve_lines = "BCD\n001\n2\nSCT\n\n\n\n\n\n\n\n";
        assert_eq!(
            QrCodeFormat::detect(twelve_lines),
            Some(QrCodeFormat::Epc06912)
        );
    }

    #[test]
    fn test_detect_prefix_takes_priority() {
        // A bank:// string that also happens to span 12 lines is Bezahlcode.
        let scanned = format!("bank://singlepayment?x=1{}", "\n".repeat(11));
        assert_eq!(
            QrCodeFormat::detect(&scanned),
            Some(QrCodeFormat::Bezahlcode)
        );
    }

    #[test]
    fn test_detect_unrecognized() {
        assert_eq!(QrCodeFormat::detect("invalidQRCodeFormat"), None);
        assert_eq!(QrCodeFormat::detect("a\nb\nc"), None);
        assert_eq!(QrCodeFormat::detect(""), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("epc069-12".parse::<QrCodeFormat>().unwrap(), QrCodeFormat::Epc06912);
        assert_eq!("GiroCode".parse::<QrCodeFormat>().unwrap(), QrCodeFormat::Epc06912);
        assert_eq!("bezahlcode".parse::<QrCodeFormat>().unwrap(), QrCodeFormat::Bezahlcode);
        assert!("unknown".parse::<QrCodeFormat>().is_err());
    }

    #[test]
    fn test_format_name() {
        assert_eq!(QrCodeFormat::Epc06912.name(), "EPC069-12");
        assert_eq!(QrCodeFormat::Bezahlcode.name(), "Bezahlcode");
    }
}
