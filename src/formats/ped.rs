//! Ped format adapter
//!
//! Parses whitespace-delimited pedigree lines and drives the whole
//! normalization pipeline: group rows into families, validate children
//! against their parents per marker column, recode alleles to 0/1/2, and
//! emit the transformed rows grouped by family.

use memchr::memchr2;
use std::io::Write;
use std::path::Path;

use crate::core::io::{open_ped, IoStrategy, LineIterator};
use crate::core::{
    recode_family_column, validate_family_column, Family, FamilyGrouper, PedParseError, PedRow,
    Result,
};

/// Zero-copy view over one whitespace-delimited data line
///
/// Fields are delimited by runs of spaces and/or tabs; only the field
/// boundaries are computed up front.
pub struct PedRecordView<'a> {
    line: &'a str,
    field_bounds: Vec<(usize, usize)>,
}

impl<'a> PedRecordView<'a> {
    /// Scan field boundaries of a line
    pub fn parse(line: &'a str) -> Self {
        let bytes = line.as_bytes();
        let mut field_bounds = Vec::with_capacity(16);
        let mut pos = 0;

        while pos < bytes.len() {
            // Skip the delimiter run
            while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
                pos += 1;
            }
            if pos >= bytes.len() {
                break;
            }
            let end = memchr2(b' ', b'\t', &bytes[pos..])
                .map(|p| pos + p)
                .unwrap_or(bytes.len());
            field_bounds.push((pos, end));
            pos = end;
        }

        Self { line, field_bounds }
    }

    /// Get the number of fields
    pub fn field_count(&self) -> usize {
        self.field_bounds.len()
    }

    /// Get field as string slice (lazy access)
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.field_bounds
            .get(index)
            .map(|(start, end)| &self.line[*start..*end])
    }

    /// All fields, in line order
    pub fn fields(&self) -> Vec<&'a str> {
        self.field_bounds
            .iter()
            .map(|(start, end)| &self.line[*start..*end])
            .collect()
    }

    /// Build a [`PedRow`] from this line
    ///
    /// `line_no` is the 1-based input line number used in error reports.
    pub fn into_row(self, line_no: usize) -> std::result::Result<PedRow, PedParseError> {
        PedRow::from_fields(&self.fields(), line_no)
    }
}

/// Conversion statistics
#[derive(Debug, Default, Clone)]
pub struct ConversionStats {
    pub families: usize,
    pub individuals: usize,
    pub markers: usize,
    pub corrected: usize,
}

/// Run the full pedigree normalization pipeline
///
/// Reads the whole file into families, validates and recodes every marker
/// column, then writes the transformed rows to `output` grouped by family
/// (mother, father, children) in the order families appear in the input.
/// Comment lines (`#`) are written through the moment they are read and
/// never enter a row; blank lines are dropped.
///
/// Fatal errors (parse errors, a family+column with more than 2 distinct
/// bases, a family missing a parent) abort the run; output already written
/// is not rolled back.
pub fn convert_ped<P: AsRef<Path>, W: Write>(input: P, mut output: W) -> Result<ConversionStats> {
    let path = input.as_ref();
    if !path.exists() {
        return Err(PedParseError::FileNotFound(path.to_path_buf()).into());
    }

    log::info!("Reading {}", path.display());
    let reader = open_ped(path, IoStrategy::Auto).map_err(PedParseError::Io)?;
    let (mut families, markers) = read_families(reader, &mut output)?;

    let mut stats = ConversionStats {
        families: families.len(),
        individuals: families.iter().map(|f| f.len()).sum(),
        markers,
        corrected: 0,
    };

    log::info!("Converting genotypes across {} marker columns", markers);
    for column in 0..markers {
        for family in &mut families {
            stats.corrected += validate_family_column(family, column)?;
            recode_family_column(family, column)?;
        }
    }

    log::info!("Writing results");
    for family in &families {
        for row in family.members() {
            writeln!(output, "{}", row.to_tsv()).map_err(PedParseError::Io)?;
        }
    }

    Ok(stats)
}

/// Read all data lines into sealed families
///
/// Returns the families in seal order together with the marker column
/// count, which is fixed by the first data row and enforced on every later
/// row. Comment lines go straight to `output`.
fn read_families<R: std::io::BufRead, W: Write>(
    reader: R,
    output: &mut W,
) -> Result<(Vec<Family>, usize)> {
    let mut grouper = FamilyGrouper::new();
    let mut markers: Option<usize> = None;
    let mut line_no = 0;

    let mut lines = LineIterator::new(reader);
    while let Some(line) = lines.next_line() {
        let line = line.map_err(PedParseError::Io)?;
        line_no += 1;

        if line.starts_with('#') {
            writeln!(output, "{}", line).map_err(PedParseError::Io)?;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let row = PedRecordView::parse(line).into_row(line_no)?;

        match markers {
            None => markers = Some(row.genotypes.len()),
            Some(expected) if expected != row.genotypes.len() => {
                return Err(PedParseError::ColumnCountMismatch {
                    line: line_no,
                    expected,
                    found: row.genotypes.len(),
                }
                .into());
            }
            Some(_) => {}
        }

        grouper.push(row, line_no)?;
    }

    Ok((grouper.finish(), markers.unwrap_or(0)))
}
