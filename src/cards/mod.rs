//! Card system: templates and instances.
//!
//! ## Key Types
//!
//! - `CardKind`: Monster or Support
//! - `CardTemplate`: Printed stats; the ten templates are a const table
//! - `Card`: A copy in play with mutable attack/health

pub mod definition;
pub mod instance;

pub use definition::{template, CardKind, CardTemplate, COPIES_PER_TEMPLATE, TEMPLATES};
pub use instance::Card;
