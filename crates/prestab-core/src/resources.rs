//! Compute-resource estimation for stability-prediction jobs.
//!
//! The models here were fitted against observed predictor runs and map a
//! residue count to the (CPU, memory, runtime) request handed to the job
//! scheduler. Pair-interaction scanning grows super-linearly with protein
//! size, so [`Mode::Epistatic`] uses a quadratic runtime fit; the other two
//! modes are cheap enough for linear or constant fits.

use serde::Serialize;
use std::fmt;

/// Safety margin applied to every fitted quantity.
const SAFETY_MARGIN: f64 = 1.2;

/// Operating mode of the downstream stability predictor.
///
/// Constructed from caller-supplied strings via [`Mode::from`], which maps
/// every unrecognized name to [`Mode::Single`]. That catch-all is a fixed
/// part of the contract, but it also means a typo like `"epistatc"` silently
/// selects the default formulas; front ends should warn when they hit it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full pair-interaction scan; the heaviest mode.
    Epistatic,
    /// Independent per-mutation scan.
    Additive,
    /// Single-mutation run; the default and the catch-all.
    #[default]
    Single,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Epistatic => "epistatic",
            Mode::Additive => "additive",
            Mode::Single => "single",
        }
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        match name {
            "epistatic" => Mode::Epistatic,
            "additive" => Mode::Additive,
            _ => Mode::Single,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource request for one prediction job, fully determined by
/// `(mode, residue count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEstimate {
    pub cpus: u32,
    pub memory_gb: u64,
    pub runtime_secs: u64,
}

impl ResourceEstimate {
    /// Memory request string in the scheduler's `"<integer>G"` format.
    pub fn memory_request(&self) -> String {
        format!("{}G", self.memory_gb)
    }
}

/// Estimates the resources needed to run the predictor in `mode` on a
/// structure with `residues` standard residues.
///
/// Pure and total: zero residues is permitted and yields the degenerate
/// values of each fit. All fitted results are truncated toward zero.
///
/// The epistatic memory fit applies [`SAFETY_MARGIN`] twice, once inside the
/// unit conversion and once outside. The compounded margin matches the
/// calibrated model and is covered by tests; do not collapse it.
pub fn estimate(mode: Mode, residues: usize) -> ResourceEstimate {
    let res = residues as f64;
    match mode {
        Mode::Epistatic => ResourceEstimate {
            cpus: 8,
            memory_gb: (152_020.0 * res * SAFETY_MARGIN / 1e6 * SAFETY_MARGIN) as u64,
            runtime_secs: ((0.0248 * res * res - 10.294 * res + 4956.8) * SAFETY_MARGIN) as u64,
        },
        Mode::Additive => ResourceEstimate {
            cpus: 1,
            memory_gb: (137_745.0 * res * SAFETY_MARGIN) as u64,
            runtime_secs: (3.9802 * res * SAFETY_MARGIN) as u64,
        },
        Mode::Single => ResourceEstimate {
            cpus: 1,
            memory_gb: ((639.77 * res + 567_236.0) * SAFETY_MARGIN) as u64,
            runtime_secs: 600,
        },
    }
}
