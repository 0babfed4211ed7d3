//! Structured identifier generators
//!
//! BSN and IBAN surrogates satisfy their respective checksum rules so they
//! survive downstream format validation; the remaining identifiers are
//! fixed-shape codes. None of these consult configuration, so they take the
//! random source directly.

use super::pools::BANK_CODES;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Generate a BSN that passes the elfproef
///
/// The first eight digits are drawn freely (leading digit nonzero), the
/// ninth is derived: sum(d[i] * w[i]) for weights 9..2 minus the check digit
/// must be divisible by 11. A derived digit of 10 is invalid, so those draws
/// are rejected.
pub fn bsn(rng: &mut ChaCha8Rng) -> String {
    loop {
        let mut digits = [0u32; 9];
        digits[0] = rng.gen_range(1..10);
        for d in digits.iter_mut().take(8).skip(1) {
            *d = rng.gen_range(0..10);
        }

        let weighted: u32 = digits
            .iter()
            .take(8)
            .enumerate()
            .map(|(i, d)| d * (9 - i as u32))
            .sum();
        let check = weighted % 11;
        if check >= 10 {
            continue;
        }
        digits[8] = check;

        return digits.iter().map(|d| char::from(b'0' + *d as u8)).collect();
    }
}

/// Remainder of a decimal digit string modulo 97
fn mod97(digits: &str) -> u32 {
    let mut rem: u32 = 0;
    for c in digits.chars() {
        let d = c.to_digit(10).unwrap_or(0);
        rem = (rem * 10 + d) % 97;
    }
    rem
}

/// Expand letters to their IBAN numeric values (A=10 .. Z=35)
fn expand_letters(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 10;
            out.push_str(&value.to_string());
        } else {
            out.push(c);
        }
    }
    out
}

/// Generate a Dutch IBAN with valid mod-97 check digits
pub fn iban(rng: &mut ChaCha8Rng) -> String {
    let bank = BANK_CODES[rng.gen_range(0..BANK_CODES.len())];
    let account: u64 = rng.gen_range(0..10_000_000_000);
    let account = format!("{account:010}");

    // Check digits make the rearranged string congruent to 1 mod 97.
    let rearranged = format!("{bank}{account}NL00");
    let rem = mod97(&expand_letters(&rearranged));
    let check = 98 - rem;

    format!("NL{check:02}{bank}{account}")
}

/// Generate an accreditation code: letter M plus three digits
pub fn accreditation_number(rng: &mut ChaCha8Rng) -> String {
    format!("M{:03}", rng.gen_range(0..1000u32))
}

/// Generate a rapport sub-identifier preserving the matched subtype
pub fn document_sub_id(sub_type: Option<&str>, rng: &mut ChaCha8Rng) -> String {
    let subtype = sub_type.unwrap_or("X");
    let number = rng.gen_range(1000..=9999u32);
    format!("RAPPORT-{subtype}-NUMMER-{number}")
}
