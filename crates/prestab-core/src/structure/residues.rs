use phf::{Set, phf_set};

/// The 20 canonical amino-acid residue codes.
///
/// Anything outside this set (ligands, waters, modified residues, nucleic
/// acids) is invisible to the residue counter.
pub static STANDARD_RESIDUES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS",
    "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO",
    "SER", "THR", "TRP", "TYR", "VAL",
};

pub fn is_standard_residue(name: &str) -> bool {
    STANDARD_RESIDUES.contains(name.trim())
}
