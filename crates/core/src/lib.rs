//! Core library for translation practice: translation providers with
//! fallback, speech capture and synthesis ports, and LCS-based
//! pronunciation scoring.

pub mod pipeline;
pub mod practice;
pub mod scoring;
pub mod shared;
