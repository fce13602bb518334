//! Core pedigree processing
//!
//! This module contains the genotype value types, family grouping,
//! Mendelian validation, and allele recoding.

mod error;
mod family;
pub mod genotype;
pub mod io;
mod recode;
mod validate;

pub use error::{
    ParseResult, PedMendelError, PedParseError, PedigreeError, PedigreeResult, Result,
};
pub use family::{Family, FamilyGrouper, PedRow, RowRole, INFO_FIELDS};
pub use genotype::{Allele, Base, Code, Genotype};
pub use io::{
    detect_compression, open_ped, CompressionFormat, IoStrategy, LineIterator, MappedReader,
    SmartReader, DEFAULT_BUFFER_SIZE, LARGE_BUFFER_SIZE, MMAP_THRESHOLD,
};
pub use recode::{recode_family_column, CodeMap};
pub use validate::{legal_genotypes, validate_family_column};
