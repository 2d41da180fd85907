//! Preset polyhedra for polyview.
//!
//! The shapes are returned as [`Polyhedron`][re::geom::Polyhedron]s ready
//! for drawing, scaled so that the largest vertex coordinate is one and
//! colored by face area.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod solids;

pub use solids::{Build, by_key};
