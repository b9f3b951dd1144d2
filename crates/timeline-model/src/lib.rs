//! Juzcast Timeline Model
//!
//! Defines the data contracts for Juzcast render runs:
//! - **Verse:** `JuzNumber` and `VerseKey` identifiers
//! - **Timeline:** the ordered list of ayah segments for one juz, as produced
//!   by the timeline builder (`timelines/juz_<n>.json`)
//! - **Layout:** the on-disk conventions for timeline and output paths
//!
//! Timelines are read-only to this system: they are loaded, iterated in
//! order, and never written back.

pub mod layout;
pub mod timeline;
pub mod verse;

pub use layout::*;
pub use timeline::*;
pub use verse::*;
