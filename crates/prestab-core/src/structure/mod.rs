//! Structure-file handling.
//!
//! Everything the sizing models need from a structure file is a single
//! integer, so this module exposes exactly that: a streaming residue counter
//! over fixed-column PDB records, plus the standard-residue vocabulary it
//! filters against.

pub mod pdb;
pub mod residues;

pub use pdb::{StructureError, count_residues, count_residues_from};
pub use residues::{STANDARD_RESIDUES, is_standard_residue};
