//! Core data model for synthetic health-system panels.
//!
//! This module defines the shared domain types imported by the synthesis
//! and analysis modules. It contains no randomness and no I/O — only types
//! and their invariants.

pub mod observation;
pub mod panel;
pub mod region;

pub use observation::{NUMERIC_COLUMNS, Observation, display_label};
pub use panel::Panel;
pub use region::RegionProfile;
