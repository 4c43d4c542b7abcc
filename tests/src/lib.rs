//! # Monkey-Types Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── credential_flows.rs   # Registry, serde and schemas together
//!     └── manifest_flows.rs     # Manifests carrying credential components
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mt-tests
//! cargo test -p mt-tests integration::credential_flows
//! ```

pub mod integration;
