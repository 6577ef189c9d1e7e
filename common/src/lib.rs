//! QuoteSwap Common Types
//!
//! This crate contains shared types used across QuoteSwap, including
//! currency codes, conversion requests and the user-facing error taxonomy.

pub mod currency;
pub mod request;
pub mod error;
pub mod constants;

pub use currency::*;
pub use request::*;
pub use error::*;
