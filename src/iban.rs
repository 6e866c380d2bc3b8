//! IBAN structure and checksum validation (ISO 13616 / ISO 7064 mod-97).
//!
//! Validation is strict: an IBAN is accepted only when its country code is
//! known, its length matches that country's registered length exactly, and
//! the mod-97 remainder of the rearranged string equals 1.

/// Registered IBAN lengths per ISO 3166 country code.
const COUNTRY_IBAN_LENGTHS: &[(&str, u8)] = &[
    ("AD", 24),
    ("AE", 23),
    ("AL", 28),
    ("AT", 20),
    ("AZ", 28),
    ("BA", 20),
    ("BE", 16),
    ("BG", 22),
    ("BH", 22),
    ("BR", 29),
    ("CH", 21),
    ("CR", 21),
    ("CY", 28),
    ("CZ", 24),
    ("DE", 22),
    ("DK", 18),
    ("DO", 28),
    ("EE", 20),
    ("ES", 24),
    ("FI", 18),
    ("FO", 18),
    ("FR", 27),
    ("GB", 22),
    ("GE", 22),
    ("GI", 23),
    ("GL", 18),
    ("GR", 27),
    ("GT", 28),
    ("HR", 21),
    ("HU", 28),
    ("IE", 22),
    ("IL", 23),
    ("IS", 26),
    ("IT", 27),
    ("KW", 30),
    ("KZ", 20),
    ("LB", 28),
    ("LT", 20),
    ("LU", 20),
    ("LV", 21),
    ("MC", 27),
    ("MD", 24),
    ("ME", 22),
    ("MK", 19),
    ("MR", 27),
    ("MT", 31),
    ("MU", 30),
    ("NL", 18),
    ("NO", 15),
    ("PK", 24),
    ("PL", 28),
    ("PS", 29),
    ("PT", 25),
    ("RO", 24),
    ("RS", 22),
    ("SA", 24),
    ("SE", 24),
    ("SI", 19),
    ("SK", 24),
    ("SM", 27),
    ("TN", 24),
    ("TR", 26),
    ("VG", 24),
];

/// Shortest registered IBAN length (Norway).
const MIN_IBAN_LENGTH: usize = 15;

/// Look up the registered IBAN length for a country code.
fn country_length(country_code: &str) -> Option<usize> {
    COUNTRY_IBAN_LENGTHS
        .binary_search_by_key(&country_code, |&(code, _)| code)
        .ok()
        .map(|idx| COUNTRY_IBAN_LENGTHS[idx].1 as usize)
}

/// Check whether a string is a structurally and arithmetically valid IBAN.
///
/// Spaces are stripped before validation; mixed case is not tolerated
/// (lowercase characters fail the character-set check).
///
/// # Examples
///
/// ```
/// assert!(qrpay::iban::is_valid("DE89 3704 0044 0532 0130 00"));
/// assert!(!qrpay::iban::is_valid("DE8937040044053201300"));
/// ```
pub fn is_valid(iban: &str) -> bool {
    let iban = iban.replace(' ', "");
    let iban_length = iban.len();
    if iban_length < MIN_IBAN_LENGTH {
        return false;
    }

    if !iban.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
        return false;
    }

    let country_code = &iban[..2];
    let mut country_is_known = false;
    if let Some(expected_length) = country_length(country_code) {
        country_is_known = true;
        if expected_length != iban_length {
            return false;
        }
    }

    // Move country code and check digits to the end before the mod-97 run.
    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);

    let checksum_passed = validate_mod97(&rearranged);
    if !country_is_known && checksum_passed {
        // An unknown country with a coincidentally passing checksum is
        // still rejected; the table carries no length to verify against.
        return false;
    }

    checksum_passed
}

/// Raw mod-97 remainder of a rearranged, letter-converted IBAN.
///
/// Letters map to two-digit values (A=10 .. Z=35), digits map to themselves
/// and any other character contributes 0. The accumulator is reduced mod 97
/// whenever it approaches the `u32` range, so no big-integer arithmetic is
/// needed. A valid IBAN yields remainder 1.
pub fn check_sum(iban: &str) -> u32 {
    let mut check_sum: u32 = 0;

    for ch in iban.chars() {
        let value = match ch {
            'A'..='Z' => ch as u32 - 'A' as u32 + 10,
            '0'..='9' => ch as u32 - '0' as u32,
            _ => 0,
        };
        if value < 10 {
            check_sum = 10 * check_sum + value;
        } else {
            check_sum = 100 * check_sum + value;
        }
        if check_sum >= u32::MAX / 100 {
            check_sum %= 97;
        }
    }

    check_sum % 97
}

fn validate_mod97(iban: &str) -> bool {
    check_sum(iban) == 1
}
