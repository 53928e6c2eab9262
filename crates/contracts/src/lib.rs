//! Shared contracts for the iCastar artist profile.
//!
//! Everything here is target-independent: the wasm frontend and any other
//! client of the profile API consume the same types and the same scoring
//! and layout rules.

pub mod domain;
pub mod shared;
pub mod system;
