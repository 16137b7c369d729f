//! Core data structures shared by the decoding and rebuilding stages.
//!
//! - [`types`] – Output elements and bead roles.
//! - [`mode`] – Atom-type tables for protein-only and protein+DNA systems.
//! - [`residue`] – Standard residues and chain kinds.
//! - [`topology`] – Chain layout mapping residue indices to chains and names.
//! - [`atom`] – Decoded beads and placed atom sites.
//! - [`frame`] – Box bounds, decoded frames and per-residue atom slots.
//!
//! The [`ChainTopology`](topology::ChainTopology) is built once per run and
//! only read afterwards; frames live for a single pass through the pipeline.

pub mod atom;
pub mod frame;
pub mod mode;
pub mod residue;
pub mod topology;
pub mod types;
