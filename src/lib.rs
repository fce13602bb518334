//! ped-mendel - Pedigree genotype normalization and Mendelian validation
//!
//! Reads a whitespace-delimited pedigree genotype file, groups rows into
//! families (mother, father, children) by the family id embedded in the
//! sample identifier, nulls out children's genotypes that are impossible
//! given the parents' genotypes at the same marker, and recodes nucleotide
//! letters to the compact numeric codes 0/1/2.
//!
//! # Example
//!
//! ```ignore
//! use ped_mendel::formats::convert_ped;
//!
//! let mut out = Vec::new();
//! let stats = convert_ped("trios.ped", &mut out)?;
//! eprintln!("{} invalid genotypes corrected", stats.corrected);
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    legal_genotypes, recode_family_column, validate_family_column, Allele, Base, Code, CodeMap,
    Family, FamilyGrouper, Genotype, PedMendelError, PedParseError, PedRow, PedigreeError, Result,
    RowRole,
};
pub use formats::{convert_ped, ConversionStats};
