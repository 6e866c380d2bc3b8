//! QR Pay IBAN Check - CLI tool for validating IBAN strings.

use clap::Parser;
use qrpay::{iban, logging};

#[derive(Parser)]
#[command(name = "qrpay_ibancheck")]
#[command(about = "Validate IBANs (ISO 13616 / ISO 7064 mod-97)", long_about = None)]
struct Cli {
    /// IBANs to validate
    #[arg(required = true)]
    ibans: Vec<String>,

    /// Only set the exit code, print nothing
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();
    let mut all_valid = true;

    for candidate in &cli.ibans {
        let valid = iban::is_valid(candidate);
        all_valid &= valid;
        if !cli.quiet {
            println!("{}\t{}", candidate, if valid { "valid" } else { "invalid" });
        }
    }

    if !all_valid {
        std::process::exit(1);
    }
}
