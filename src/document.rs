//! QR payment-code document: format detection and parameter extraction.

use serde::Serialize;

use crate::error::Result;
use crate::types::PaymentParameters;
use crate::{bezahlcode_format, epc069_format, Error, QrCodeFormat};

/// A document built from a scanned QR payment-code string.
///
/// Detection and extraction happen at construction time; the document is
/// immutable afterwards. Two documents compare equal when they were built
/// from the same scanned string.
///
/// # Examples
///
/// ```
/// use qrpay::QrCodeDocument;
///
/// let document = QrCodeDocument::new(
///     "bank://singlepayment?name=Shop&iban=DE89370400440532013000\
///      &amount=12.50&currency=EUR",
/// );
/// document.check_type()?;
/// assert_eq!(document.parameters().amount_to_pay.as_deref(), Some("12.50:EUR"));
/// # Ok::<(), qrpay::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct QrCodeDocument {
    scanned_string: String,
    format: Option<QrCodeFormat>,
    parameters: PaymentParameters,
}

/// JSON payload handed to the payment-prefill consumer.
#[derive(Serialize)]
struct PaymentInformation<'a> {
    qrcode: &'a str,
    paymentdata: &'a PaymentParameters,
}

impl QrCodeDocument {
    /// Build a document from a scanned string, detecting the format and
    /// extracting whatever payment parameters the payload carries.
    pub fn new(scanned_string: impl Into<String>) -> Self {
        let scanned_string = scanned_string.into();
        let format = QrCodeFormat::detect(&scanned_string);
        let parameters = extract_parameters(&scanned_string, format);

        match format {
            Some(format) => log::debug!("detected {} QR payment code", format.name()),
            None => log::debug!("scanned string matches no known QR payment-code format"),
        }

        QrCodeDocument {
            scanned_string,
            format,
            parameters,
        }
    }

    /// The raw scanned string the document was built from.
    pub fn scanned_string(&self) -> &str {
        &self.scanned_string
    }

    /// The detected payment-code format, if any.
    pub fn format(&self) -> Option<QrCodeFormat> {
        self.format
    }

    /// The extracted payment parameters.
    pub fn parameters(&self) -> &PaymentParameters {
        &self.parameters
    }

    /// Fail with [`Error::UnknownQrCodeFormat`] when the scanned string
    /// matched none of the supported layouts. Field-level extraction
    /// failures are not errors; they surface as omitted parameters.
    pub fn check_type(&self) -> Result<()> {
        if self.format.is_none() {
            return Err(Error::UnknownQrCodeFormat);
        }
        Ok(())
    }

    /// Pretty-printed JSON payment-information payload:
    /// `{"qrcode": <scanned string>, "paymentdata": {<extracted fields>}}`.
    pub fn payment_information(&self) -> Result<String> {
        let payload = PaymentInformation {
            qrcode: &self.scanned_string,
            paymentdata: &self.parameters,
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}

impl PartialEq for QrCodeDocument {
    fn eq(&self, other: &Self) -> bool {
        self.scanned_string == other.scanned_string
    }
}

impl Eq for QrCodeDocument {}

/// Extract payment parameters for an already-detected format.
///
/// An undetected format yields empty parameters.
pub fn extract_parameters(scanned: &str, format: Option<QrCodeFormat>) -> PaymentParameters {
    match format {
        Some(QrCodeFormat::Bezahlcode) => bezahlcode_format::extract_parameters(scanned),
        Some(QrCodeFormat::Epc06912) => epc069_format::extract_parameters(scanned),
        None => PaymentParameters::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPC_SCANNED: &str = "BCD\n001\n2\nSCT\nGENODEF1KIL\nMax Mustermann\n\
                               DE52210900070088299309\nEUR1456.89\n\n457845789452\n\n\
                               Diverse Autoteile, Re 789452 KN 457845";

    #[test]
    fn test_epc_document() {
        let document = QrCodeDocument::new(EPC_SCANNED);

        assert_eq!(document.format(), Some(QrCodeFormat::Epc06912));
        assert!(document.check_type().is_ok());
        assert_eq!(document.parameters().iban.as_deref(), Some("DE52210900070088299309"));
        assert_eq!(document.parameters().amount_to_pay.as_deref(), Some("1456.89:EUR"));
    }

    #[test]
    fn test_bezahlcode_document() {
        let document = QrCodeDocument::new(
            "bank://singlepayment?bic=TESTBIC&name=Max%20Mustermann\
             &iban=DE89370400440532013000&reason=Invoice42&amount=12.50&currency=EUR",
        );

        assert_eq!(document.format(), Some(QrCodeFormat::Bezahlcode));
        assert!(document.check_type().is_ok());
        assert_eq!(document.parameters().payment_recipient.as_deref(), Some("Max Mustermann"));
    }

    #[test]
    fn test_unrecognized_format_fails_check_type() {
        let document = QrCodeDocument::new("invalidQRCodeFormat");

        assert_eq!(document.format(), None);
        assert!(document.parameters().is_empty());
        assert!(matches!(
            document.check_type(),
            Err(Error::UnknownQrCodeFormat)
        ));
    }

    #[test]
    fn test_eleven_line_string_is_unrecognized() {
        let document = QrCodeDocument::new("1\n003\n3\nSCT\n5\n6\n7\n8\n9\n10\n11");
        assert!(document.check_type().is_err());
        assert!(document.parameters().is_empty());
    }

    #[test]
    fn test_payment_information_payload() {
        let document = QrCodeDocument::new(EPC_SCANNED);
        let payload = document.payment_information().unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(json["qrcode"], EPC_SCANNED);
        assert_eq!(json["paymentdata"]["iban"], "DE52210900070088299309");
        assert_eq!(json["paymentdata"]["amountToPay"], "1456.89:EUR");
    }

    #[test]
    fn test_equality_is_by_scanned_string() {
        assert_eq!(QrCodeDocument::new(EPC_SCANNED), QrCodeDocument::new(EPC_SCANNED));
        assert_ne!(
            QrCodeDocument::new(EPC_SCANNED),
            QrCodeDocument::new("bank://singlepayment")
        );
    }
}
