//! Text formatting shared by the visual screens and the narration scripts.

mod burial;
mod dates;

pub use burial::{burial_site_for_speech, UNKNOWN_BURIAL_SITE};
pub use dates::{
    approximate_age, display_date_or_unknown, format_date_display, format_date_for_api,
    mask_date_input,
};
