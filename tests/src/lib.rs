//! # CellSign Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs    # End-to-end sign -> transmit -> verify choreography
//!     └── tamper.rs   # Adversarial inputs: bit flips, truncation, wrong keys
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cs-tests
//!
//! # By category
//! cargo test -p cs-tests integration::flows::
//! cargo test -p cs-tests integration::tamper::
//! ```

#![allow(dead_code)]

pub mod integration;
