//! Allele recoding
//!
//! After validation, every genotype in a family+column is rewritten from
//! nucleotide letters to the numeric codes 0/1/2: "0" stays missing, and
//! 1/2 are assigned by lexicographic order of the distinct bases observed
//! among that family's own members at that column. The scope is per family,
//! not global, so the numbering of the same physical allele may differ
//! between families.

use std::collections::BTreeSet;

use crate::core::error::{PedigreeError, PedigreeResult};
use crate::core::family::Family;
use crate::core::genotype::{Allele, Base, Code, Genotype};

/// Base-to-code assignment for one family at one marker column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeMap {
    one: Option<Base>,
    two: Option<Base>,
}

impl CodeMap {
    /// Build the assignment from the bases observed across a family's
    /// members at one column
    ///
    /// More than 2 distinct bases violates the biallelic assumption and is
    /// fatal. Zero or one observed base is legal; with one base, code 2 is
    /// simply never assigned.
    pub fn from_family_column(family: &Family, column: usize) -> PedigreeResult<CodeMap> {
        let mut observed: BTreeSet<Base> = BTreeSet::new();
        for row in family.members() {
            for allele in row.genotypes[column].alleles() {
                if let Some(base) = allele.base() {
                    observed.insert(base);
                }
            }
        }
        if observed.len() > 2 {
            return Err(PedigreeError::BiallelicViolation {
                family_id: family.id().to_string(),
                column,
            });
        }
        let mut bases = observed.into_iter();
        Ok(CodeMap {
            one: bases.next(),
            two: bases.next(),
        })
    }

    /// Recode a single allele position
    ///
    /// Missing stays missing and already-coded values pass through
    /// unchanged. A base absent from the assignment degrades to missing for
    /// this position alone; its sibling allele is not affected.
    pub fn encode(&self, allele: Allele) -> Allele {
        match allele {
            Allele::Base(base) if self.one == Some(base) => Allele::Coded(Code::One),
            Allele::Base(base) if self.two == Some(base) => Allele::Coded(Code::Two),
            Allele::Base(_) => Allele::Missing,
            other => other,
        }
    }
}

/// Rewrite every genotype of a family at one column into coded form
pub fn recode_family_column(family: &mut Family, column: usize) -> PedigreeResult<()> {
    let map = CodeMap::from_family_column(family, column)?;
    for row in family.members_mut() {
        let genotype = row.genotypes[column];
        row.genotypes[column] = Genotype::new(map.encode(genotype.first), map.encode(genotype.second));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::family::{FamilyGrouper, PedRow};

    fn row(line: &str) -> PedRow {
        let fields: Vec<&str> = line.split_whitespace().collect();
        PedRow::from_fields(&fields, 1).unwrap()
    }

    fn family(mother: &str, father: &str, children: &[&str]) -> Family {
        let mut grouper = FamilyGrouper::new();
        grouper
            .push(row(&format!("F1 1F_c1_fam1 0 0 2 1 {mother}")), 1)
            .unwrap();
        grouper
            .push(row(&format!("F1 1M_c1_fam1 0 0 1 1 {father}")), 2)
            .unwrap();
        for (i, child) in children.iter().enumerate() {
            grouper
                .push(row(&format!("F1 2M_c1_fam1 1 2 1 1 {child}")), 3 + i)
                .unwrap();
        }
        grouper.finish().remove(0)
    }

    fn rendered(family: &Family, column: usize) -> Vec<String> {
        family
            .members()
            .map(|r| r.genotypes[column].to_string())
            .collect()
    }

    #[test]
    fn test_codes_follow_lexicographic_order() {
        let mut fam = family("G G", "A A", &["A G"]);
        recode_family_column(&mut fam, 0).unwrap();
        // A sorts before G, so A is 1 even though G appears first in the file
        assert_eq!(rendered(&fam, 0), vec!["2 2", "1 1", "1 2"]);
    }

    #[test]
    fn test_missing_is_preserved() {
        let mut fam = family("A G", "0 0", &["A 0"]);
        recode_family_column(&mut fam, 0).unwrap();
        assert_eq!(rendered(&fam, 0), vec!["1 2", "0 0", "1 0"]);
    }

    #[test]
    fn test_single_base_column_never_uses_code_two() {
        let mut fam = family("A A", "A 0", &["A A", "0 0"]);
        recode_family_column(&mut fam, 0).unwrap();
        assert_eq!(rendered(&fam, 0), vec!["1 1", "1 0", "1 1", "0 0"]);
    }

    #[test]
    fn test_all_missing_column_is_legal() {
        let mut fam = family("0 0", "0 0", &["0 0"]);
        recode_family_column(&mut fam, 0).unwrap();
        assert_eq!(rendered(&fam, 0), vec!["0 0", "0 0", "0 0"]);
    }

    #[test]
    fn test_three_bases_is_fatal() {
        let fam = family("A C", "G G", &[]);
        let err = CodeMap::from_family_column(&fam, 0).unwrap_err();
        match err {
            PedigreeError::BiallelicViolation { family_id, column } => {
                assert_eq!(family_id, "fam1");
                assert_eq!(column, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_children_count_toward_observed_bases() {
        let fam = family("A A", "A A", &["A C", "C G"]);
        assert!(CodeMap::from_family_column(&fam, 0).is_err());
    }

    #[test]
    fn test_encode_foreign_base_degrades_to_missing_alone() {
        let fam = family("A A", "A A", &[]);
        let map = CodeMap::from_family_column(&fam, 0).unwrap();
        assert_eq!(map.encode(Allele::Base(Base::G)), Allele::Missing);
        assert_eq!(map.encode(Allele::Base(Base::A)), Allele::Coded(Code::One));
    }

    #[test]
    fn test_encode_is_idempotent_on_coded_values() {
        let fam = family("A G", "A G", &[]);
        let map = CodeMap::from_family_column(&fam, 0).unwrap();
        assert_eq!(map.encode(Allele::Coded(Code::One)), Allele::Coded(Code::One));
        assert_eq!(map.encode(Allele::Coded(Code::Two)), Allele::Coded(Code::Two));
        assert_eq!(map.encode(Allele::Missing), Allele::Missing);
    }

    #[test]
    fn test_scope_is_per_column() {
        let mut fam = family("A A C C", "A A T T", &[]);
        recode_family_column(&mut fam, 0).unwrap();
        recode_family_column(&mut fam, 1).unwrap();
        assert_eq!(rendered(&fam, 0), vec!["1 1", "1 1"]);
        // C and T get their own assignment at column 1
        assert_eq!(rendered(&fam, 1), vec!["1 1", "2 2"]);
    }
}
