//! Artifact emitters.
pub mod json;
