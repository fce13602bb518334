//! Error types for ped-mendel
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ped-mendel operations
#[derive(Debug, Error)]
pub enum PedMendelError {
    /// Pedigree file parsing errors
    #[error("Ped parse error: {0}")]
    Parse(#[from] PedParseError),

    /// Family/column level validation errors
    #[error("Pedigree error: {0}")]
    Pedigree(#[from] PedigreeError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing pedigree data lines
#[derive(Debug, Error)]
pub enum PedParseError {
    /// Data line with fewer than the 6 mandatory info fields
    #[error("Too few fields at line {line}: expected at least 6, found {found}")]
    TooFewFields { line: usize, found: usize },

    /// Odd number of allele fields after the info columns
    #[error("Unpaired allele at line {line}: genotype columns must come in pairs")]
    UnpairedAllele { line: usize },

    /// Allele token outside {A, C, G, T, 0}
    #[error("Invalid allele '{token}' at line {line}: expected A, C, G, T or 0")]
    InvalidAllele { line: usize, token: String },

    /// Sample identifier missing the sex marker or the family id token
    #[error("Malformed sample id '{id}' at line {line}: expected <prefix><sex>_<cohort>_<family>")]
    MalformedSampleId { line: usize, id: String },

    /// Row with a different number of genotype columns than the first row
    #[error("Column count mismatch at line {line}: expected {expected} genotype columns, found {found}")]
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Family id re-appeared after its family was sealed
    #[error("Family '{family_id}' re-appears at line {line}: input must be grouped by family id")]
    UnsortedFamily { line: usize, family_id: String },

    /// File not found
    #[error("Ped file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error during parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during family validation and recoding
#[derive(Debug, Error)]
pub enum PedigreeError {
    /// More than 2 distinct bases within one family at one marker column
    #[error("More than 2 different bases in column {column} of family '{family_id}'")]
    BiallelicViolation { family_id: String, column: usize },

    /// Family is missing its mother or father row
    #[error("Family '{family_id}' is missing its {missing} row")]
    IncompleteFamily {
        family_id: String,
        missing: &'static str,
    },
}

/// Result type alias for ped-mendel operations
pub type Result<T> = std::result::Result<T, PedMendelError>;

/// Result type alias for parsing operations
pub type ParseResult<T> = std::result::Result<T, PedParseError>;

/// Result type alias for validation and recoding operations
pub type PedigreeResult<T> = std::result::Result<T, PedigreeError>;
