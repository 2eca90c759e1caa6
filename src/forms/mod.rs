//! Client-side validation and masking for the LGPD consent form.

mod consent;
mod cpf;
mod masks;

pub use consent::{render_consent_html, ConsentError, ConsentForm};
pub use cpf::{mask_cpf, validate_cpf};
pub use masks::{mask_birth_date, mask_cep, mask_phone, cep_digits};
