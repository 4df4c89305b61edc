//! Wide unsigned integer words.
//!
//! This module provides the core pieces of the crate:
//! - [`WordOps`] - the capability contract every limb type satisfies
//! - [`Composite`] - the generic two-limb wide word
//! - [`Word96`] .. [`Word256`] - the named fixed widths
//! - [`Wire`] - the fixed-size byte framing contract

mod alias;
mod composite;
mod limb;
mod wire;

pub use alias::{Word128, Word160, Word192, Word224, Word256, Word96};
pub use composite::Composite;
pub use limb::WordOps;
pub use wire::{Wire, WireError};
