//! # ScalarDL Client SDK Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── mocks.rs          # Scripted transport stubs and an in-memory ledger fake
//! │
//! └── integration/      # Cross-layer protocol flows
//!     ├── execution.rs      # Ordering / execution / validation choreography
//!     ├── registration.rs   # Certificate, contract and function routing
//!     ├── validation.rs     # Direct and auditor-coordinated ledger validation
//!     └── end_to_end.rs     # Real keys against the in-memory ledger
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p scalardl-client-tests
//!
//! # By category
//! cargo test -p scalardl-client-tests integration::
//! ```

#![allow(dead_code)]

pub mod mocks;
