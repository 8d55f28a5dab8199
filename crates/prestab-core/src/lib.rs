//! # prestab Core Library
//!
//! A sizing library for protein-stability-prediction jobs. Given a structure
//! file, it determines how large the downstream prediction job will be and
//! what compute resources to request for it.
//!
//! The library deliberately performs no structural or energetic computation
//! of its own. It is split into two small, stateless layers:
//!
//! - **[`structure`]: The Input Side.** Streaming, fixed-column parsing of
//!   structure files, reduced to the single quantity the sizing models need:
//!   the number of unique standard amino-acid residues in primary
//!   conformation.
//!
//! - **[`resources`]: The Output Side.** Empirically fitted models that turn
//!   a residue count and an operating mode into a concrete
//!   (CPU, memory, runtime) request for the job scheduler.

pub mod resources;
pub mod structure;
