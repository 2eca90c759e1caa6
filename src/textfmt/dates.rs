//! Date conversion between the service's `YYYY-MM-DD` form and the
//! `DD/MM/YYYY` form shown and spoken to the user.

/// Converts `YYYY-MM-DD` to `DD/MM/YYYY`.
///
/// Anything that does not split into three parts is returned unchanged;
/// the results list shows whatever the service sent.
pub fn format_date_display(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return date.to_string();
    }
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}

/// Detail-screen variant: empty or malformed input becomes the fixed
/// "not informed" sentence instead of echoing the raw value.
pub fn display_date_or_unknown(date: &str) -> String {
    if date.is_empty() {
        return "Data não informada".to_string();
    }
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return "Data não informada".to_string();
    }
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}

/// Converts user input `DD/MM/YYYY` to the API's `YYYY-MM-DD`.
/// Malformed input collapses to an empty string and the parameter is
/// simply not sent.
pub fn format_date_for_api(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return String::new();
    }
    format!("{}-{}-{}", parts[2], parts[1], parts[0])
}

/// Progressive `DD/MM/YYYY` mask for the death-date search field.
/// Non-digits are stripped, separators inserted as the user types.
pub fn mask_date_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Approximate age at death, in the service's own arithmetic: a negative
/// day difference borrows a flat 30 days, a negative month difference
/// borrows 12 months. Kept as-is; the upstream counter part behaves this
/// way and the spoken ages must match it.
///
/// Output: "N ano(s)", joined with " e N mês(es)" when months are
/// non-zero; bare days only when both years and months came out zero.
/// Empty string when either date is missing or unparseable.
pub fn approximate_age(nasc: &str, falec: &str) -> String {
    let Some((by, bm, bd)) = split_ymd(nasc) else {
        return String::new();
    };
    let Some((dy, dm, dd)) = split_ymd(falec) else {
        return String::new();
    };

    let mut years = dy - by;
    let mut months = dm - bm;
    let mut days = dd - bd;

    if days < 0 {
        months -= 1;
        days += 30;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let mut out = String::new();
    if years > 0 {
        out.push_str(&format!("{} ano{}", years, if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        if !out.is_empty() {
            out.push_str(" e ");
        }
        out.push_str(&format!("{} mês{}", months, if months > 1 { "es" } else { "" }));
    }
    if out.is_empty() && days > 0 {
        out = format!("{} dia{}", days, if days > 1 { "s" } else { "" });
    }
    out
}

fn split_ymd(date: &str) -> Option<(i32, i32, i32)> {
    let mut it = date.split('-');
    let y: i32 = it.next()?.parse().ok()?;
    let m: i32 = it.next()?.parse().ok()?;
    let d: i32 = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    // The upstream check treats zero fields as missing data.
    if y == 0 || m == 0 || d == 0 {
        return None;
    }
    Some((y, m, d))
}
