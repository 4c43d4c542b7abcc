//! # Shared Types Crate
//!
//! Tag sets and wire types used by both the credential and the plugin
//! crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: tag naming and tag lookup live here, so an
//!   unknown name fails the same way whichever crate parses it.
//! - **Closed Sets**: every tag set is a fieldless enum implementing [`Tag`];
//!   adding a member means touching the enum, never a string table elsewhere.
//! - **Names on the Wire**: tags serialize as their canonical name, not as an
//!   index, so reordering members never changes the wire format.

pub mod b64_bytes;
pub mod errors;
pub mod operating_system;
pub mod tag;

pub use b64_bytes::B64Bytes;
pub use errors::*;
pub use operating_system::OperatingSystem;
pub use tag::Tag;
