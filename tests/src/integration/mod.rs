//! # Integration Tests
//!
//! Cross-crate flows exercising the full broadcast authentication path.

pub mod flows;
pub mod tamper;
