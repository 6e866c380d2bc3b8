//! QR Pay Extract - CLI tool for extracting payment data from scanned QR strings.

use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use qrpay::{document, logging, QrCodeDocument, QrCodeFormat, Result};

#[derive(Parser)]
#[command(name = "qrpay_extract")]
#[command(about = "Extract payment data from a scanned QR payment-code string", long_about = None)]
struct Cli {
    /// Input file containing the scanned string (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Force a format instead of auto-detecting (epc069-12, bezahlcode)
    #[arg(long)]
    format: Option<String>,

    /// Output file for the payment-data JSON (or stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let scanned = if let Some(ref input_path) = cli.input {
        let mut file = File::open(input_path)?;
        read_scanned_string(&mut file)?
    } else {
        let mut stdin = io::stdin();
        read_scanned_string(&mut stdin)?
    };

    let payload = if let Some(ref format) = cli.format {
        // Forced format skips detection but keeps extraction semantics.
        let format = format.parse::<QrCodeFormat>()?;
        let parameters = document::extract_parameters(&scanned, Some(format));
        serde_json::to_string_pretty(&serde_json::json!({
            "qrcode": scanned,
            "paymentdata": parameters,
        }))?
    } else {
        let document = QrCodeDocument::new(scanned);
        document.check_type()?;
        document.payment_information()?
    };

    if let Some(ref output_path) = cli.output {
        let mut file = File::create(output_path)?;
        writeln!(file, "{}", payload)?;
    } else {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", payload)?;
    }

    Ok(())
}

fn read_scanned_string<R: Read>(reader: &mut R) -> Result<String> {
    let mut scanned = String::new();
    reader.read_to_string(&mut scanned)?;
    // Scanner output often carries a trailing newline that is not part of
    // the payload; stripping it keeps the 12-line detection honest.
    if scanned.ends_with('\n') {
        scanned.pop();
        if scanned.ends_with('\r') {
            scanned.pop();
        }
    }
    Ok(scanned)
}
