//! Input masks for the remaining LGPD form fields.

/// `00000-000` postal-code mask.
pub fn mask_cep(raw: &str) -> String {
    let digits = cep_digits(raw);
    if digits.len() <= 5 {
        digits
    } else {
        format!("{}-{}", &digits[..5], &digits[5..])
    }
}

/// Bare digits of a CEP, capped at eight. Eight digits is the trigger
/// for the address lookup.
pub fn cep_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect()
}

/// `(00) 0 0000-0000` phone mask, eleven digits max.
pub fn mask_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(11).collect();
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3 => format!("({}) {}", &digits[..2], &digits[2..]),
        4..=7 => format!("({}) {} {}", &digits[..2], &digits[2..3], &digits[3..]),
        _ => format!(
            "({}) {} {}-{}",
            &digits[..2],
            &digits[2..3],
            &digits[3..7],
            &digits[7..]
        ),
    }
}

/// `DD/MM/YYYY` mask for the birth-date field.
pub fn mask_birth_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}
