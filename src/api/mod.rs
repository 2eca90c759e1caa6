//! Client for the Memorial Eternum web service.
//!
//! All business logic lives on the service; this module only shapes
//! requests and tolerates loosely-typed PHP responses (numeric ids as
//! strings, flags as "0"/"1", missing fields).

mod client;
mod types;

pub use client::{ApiError, MemorialClient, DEFAULT_BASE_URL, VIACEP_BASE_URL};
pub use types::{Address, BurialEntry, DeceasedFields, DeceasedRecord};
