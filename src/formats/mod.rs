//! File format adapters
//!
//! Adapter for the whitespace-delimited pedigree genotype format.

pub mod ped;

pub use ped::{convert_ped, ConversionStats, PedRecordView};
