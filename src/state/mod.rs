//! State Module - Shared reactive state
//!
//! - **Modality** - The "last input channel was keyboard" flag and its
//!   injectable handle

mod modality;

pub use modality::*;
