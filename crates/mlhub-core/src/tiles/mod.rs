//! Map layer configuration and TileJSON lookup.
//!
//! A [`TileLayer`] names a collection, an item and the assets to render,
//! plus optional band math and styling. [`TilerClient`] turns it into a
//! request against a dynamic tile rendering service and returns the tile
//! URL templates a map client can display.

mod client;
mod layer;

pub use client::{TileJson, TilerClient};
pub use layer::{Rescale, TileLayer};
