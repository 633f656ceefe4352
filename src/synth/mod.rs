//! Data-synthesis model
//!
//! This module owns the generation side of the crate: static region base
//! profiles, per-(date, region) observation synthesis with a shared seasonal
//! wave and independent noise terms, and assembly of the full ordered panel.
//!
//! Synthesis is pure given (configuration, seed): the randomness source is
//! an explicit handle, never process-wide state.

pub mod assembler;
pub mod observation;
pub mod profile;

pub use assembler::{PanelAssembler, generate_panel};
pub use observation::{ObservationSynthesizer, seasonal_factor};
pub use profile::RegionProfileGenerator;
