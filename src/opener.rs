//! Hands URLs to the platform opener (mail client, browser, WhatsApp).

use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

/// Fire-and-forget; a missing opener only logs.
pub fn open_external(url: &str) {
    let spawned = Command::new(OPENER)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(err) = spawned {
        tracing::warn!("could not open '{}': {}", url, err);
    }
}

/// `mailto:` URL with an optional subject.
pub fn mailto_url(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", email, percent_encode(subject)),
        None => format!("mailto:{}", email),
    }
}

pub fn whatsapp_url(phone: &str) -> String {
    format!("https://wa.me/{}", phone)
}

fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_url("memorialeternum@gmail.com", Some("Homenagem para Maria")),
            "mailto:memorialeternum@gmail.com?subject=Homenagem%20para%20Maria"
        );
    }

    #[test]
    fn whatsapp_link() {
        assert_eq!(whatsapp_url("5544988378222"), "https://wa.me/5544988378222");
    }
}
