//! Burial-site references for speech.
//!
//! The service stores sites as terse references like `Q:12 L:34` or
//! `Quadra 12 - Lote 34`. The synthesizer reads those badly, so the
//! block/lot pair is extracted and rewritten in full words.

use std::sync::OnceLock;

use regex::Regex;

pub const UNKNOWN_BURIAL_SITE: &str = "Local de sepultura não informado";

fn block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Q(?:uadra)?\s*[:\-]?\s*([A-Za-z0-9]+)").expect("block regex"))
}

fn lot_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)L(?:ote)?\s*[:\-]?\s*([A-Za-z0-9]+)").expect("lot regex"))
}

/// Rewrites a `Q… L…` reference as "Quadra {q} Lote {l}".
///
/// Both captures must be present; otherwise the input is returned
/// unchanged so free-form site descriptions are still spoken. Empty
/// input becomes the fixed "not informed" sentence.
pub fn burial_site_for_speech(site: &str) -> String {
    if site.is_empty() {
        return UNKNOWN_BURIAL_SITE.to_string();
    }
    let q = block_re().captures(site);
    let l = lot_re().captures(site);
    match (q, l) {
        (Some(q), Some(l)) => format!("Quadra {} Lote {}", &q[1], &l[1]),
        _ => site.to_string(),
    }
}
