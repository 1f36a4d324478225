//! Release-key to version-label resolution
//!
//! # Modules
//!
//! - [`table`]: static table of known release keys and their version labels
//! - [`resolver`]: exact-match and nearest-lower-bound resolution

pub mod resolver;
pub mod table;
