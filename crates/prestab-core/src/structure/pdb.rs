use super::residues::is_standard_residue;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

// PDB ATOM record columns (0-based, end-exclusive byte offsets).
const RECORD_TYPE: (usize, usize) = (0, 6);
const ALT_LOC: (usize, usize) = (16, 17);
const RESIDUE_NAME: (usize, usize) = (17, 20);
const CHAIN_ID: (usize, usize) = (21, 22);
const RESIDUE_SEQ: (usize, usize) = (22, 26);
const INSERTION_CODE: (usize, usize) = (26, 27);

/// Shortest line that still carries every column above, including the
/// insertion code. Anything shorter is skipped before field extraction.
const MIN_ATOM_LINE_LEN: usize = 27;

/// Alternate-location marker of the primary conformer.
const PRIMARY_ALT_LOC: &str = "A";

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("failed to open structure file '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while reading structure file: {0}")]
    Io(#[from] io::Error),
}

/// Identity of one logical residue within a structure.
///
/// Sequence numbers repeat across chains and insertion codes disambiguate
/// residues sharing a number, so all three fields are needed for a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResidueKey {
    chain_id: String,
    seq_number: isize,
    insertion_code: String,
}

fn slice_and_trim(line: &str, range: (usize, usize)) -> &str {
    line.get(range.0..range.1).unwrap_or("").trim()
}

/// Counts the unique standard amino-acid residues in a structure file.
///
/// The file is read in a single streaming pass; each `ATOM` line in primary
/// conformation with a standard residue name contributes its residue key to
/// a seen-set, and the count is the size of that set. Lines that are too
/// short, carry a different record type, name a non-standard residue, or
/// have an unparsable sequence number are skipped silently.
///
/// # Errors
///
/// Returns [`StructureError::Open`] if the path cannot be opened for
/// reading, or [`StructureError::Io`] if a read fails mid-stream.
pub fn count_residues(path: impl AsRef<Path>) -> Result<usize, StructureError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StructureError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    count_residues_from(&mut BufReader::new(file))
}

/// Reader-based entry point backing [`count_residues`].
pub fn count_residues_from(reader: &mut impl BufRead) -> Result<usize, StructureError> {
    let mut seen: HashSet<ResidueKey> = HashSet::new();

    for line_res in reader.lines() {
        let line = line_res?;
        if line.len() < MIN_ATOM_LINE_LEN {
            continue;
        }
        if slice_and_trim(&line, RECORD_TYPE) != "ATOM" {
            continue;
        }

        // Primary conformer only: blank altLoc or the designated marker.
        // Lines for any other conformer are skipped outright, so a residue
        // observed only as a non-primary conformer is never counted.
        let alt_loc = slice_and_trim(&line, ALT_LOC);
        if !(alt_loc.is_empty() || alt_loc == PRIMARY_ALT_LOC) {
            continue;
        }

        let residue_name = slice_and_trim(&line, RESIDUE_NAME);
        if !is_standard_residue(residue_name) {
            continue;
        }

        let seq_number: isize = match slice_and_trim(&line, RESIDUE_SEQ).parse() {
            Ok(n) => n,
            Err(_) => continue,
        };

        seen.insert(ResidueKey {
            chain_id: slice_and_trim(&line, CHAIN_ID).to_string(),
            seq_number,
            insertion_code: slice_and_trim(&line, INSERTION_CODE).to_string(),
        });
    }

    Ok(seen.len())
}
