//! Velvet Core Library
//!
//! Domain models, the guest roster, screening, and descriptor assignment
//! for the Velvet club-entry flow.

pub mod error;
pub mod invariants;
pub mod models;
pub mod roster;
pub mod screening;
pub mod wardrobe;

pub use error::{Error, Result};
pub use models::*;
pub use roster::Roster;
pub use screening::{ScreeningEngine, ScreeningResult};
pub use wardrobe::DescriptorPolicy;
