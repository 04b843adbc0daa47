//! Support card effects.
//!
//! ## Key Types
//!
//! - `SupportEffect`: Heal, Boost or Draw
//! - `StatChange`: before/after record for the event log
//! - `EffectResolver`: applies an effect to the caster's field

pub mod effect;
pub mod resolver;

pub use effect::{Stat, StatChange, SupportEffect};
pub use resolver::{EffectResolver, EffectResult};
