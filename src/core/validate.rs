//! Mendelian validation
//!
//! For one family at one marker column, determines the set of child
//! genotypes consistent with the parental genotypes and nulls out children
//! that fall outside it. Corrections are counted and returned; they are
//! never errors.
//!
//! All set membership runs on canonical (unordered) genotype forms, since
//! positional order within a pair carries no inheritance meaning.

use std::collections::HashSet;

use crate::core::error::{PedigreeError, PedigreeResult};
use crate::core::family::{Family, PedRow};
use crate::core::genotype::{Allele, Base, Genotype};

/// Compute the set of child genotypes consistent with the given parents
///
/// Both parents known: the four pairings of one maternal and one paternal
/// allele. One parent missing: liberal acceptance; the unknown parent is
/// treated as consistent with any allele, so every base pairing passes, as
/// does any pairing of the known parent's alleles with a base. Both parents
/// missing: `None`, meaning no information is available and nothing should
/// be corrected.
///
/// All returned genotypes are canonical.
pub fn legal_genotypes(mother: Genotype, father: Genotype) -> Option<HashSet<Genotype>> {
    let mut legal = HashSet::new();
    match (mother.is_missing(), father.is_missing()) {
        (true, true) => return None,
        (false, false) => {
            for m in mother.alleles() {
                for d in father.alleles() {
                    legal.insert(Genotype::new(m, d).canonical());
                }
            }
        }
        (false, true) | (true, false) => {
            let known = if father.is_missing() { mother } else { father };
            for p in known.alleles() {
                for b in Base::ALL {
                    legal.insert(Genotype::new(p, Allele::Base(b)).canonical());
                }
            }
            for b1 in Base::ALL {
                for b2 in Base::ALL {
                    legal.insert(Genotype::new(Allele::Base(b1), Allele::Base(b2)).canonical());
                }
            }
        }
    }
    Some(legal)
}

/// Null out children inconsistent with their parents at one marker column
///
/// A child genotype of "0 0" is always left alone; missing data is never
/// corrected further. Returns the number of genotypes replaced.
pub fn validate_family_column(family: &mut Family, column: usize) -> PedigreeResult<usize> {
    let mother_gt = parent_genotype(family.mother.as_ref(), family.id(), column, "mother")?;
    let father_gt = parent_genotype(family.father.as_ref(), family.id(), column, "father")?;

    let legal = match legal_genotypes(mother_gt, father_gt) {
        Some(legal) => legal,
        None => return Ok(0),
    };

    let mut corrected = 0;
    for child in &mut family.children {
        let genotype = child.genotypes[column];
        if genotype.is_missing() {
            continue;
        }
        if !legal.contains(&genotype.canonical()) {
            child.genotypes[column] = Genotype::MISSING;
            corrected += 1;
        }
    }
    Ok(corrected)
}

fn parent_genotype(
    parent: Option<&PedRow>,
    family_id: &str,
    column: usize,
    missing: &'static str,
) -> PedigreeResult<Genotype> {
    parent
        .map(|row| row.genotypes[column])
        .ok_or_else(|| PedigreeError::IncompleteFamily {
            family_id: family_id.to_string(),
            missing,
        })
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

    fn gt(pair: &str) -> Genotype {
        let mut it = pair.split(' ');
        Genotype::new(
            Allele::from_token(it.next().unwrap()).unwrap(),
            Allele::from_token(it.next().unwrap()).unwrap(),
        )
    }

    #[test]
    fn test_both_parents_missing_is_a_no_op() {
        let mut fam = family("0 0", "0 0", &["C C", "A G", "0 0"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 0);
        assert_eq!(fam.children[0].genotypes[0], gt("C C"));
        assert_eq!(fam.children[1].genotypes[0], gt("A G"));
    }

    #[test]
    fn test_known_parents_accept_the_four_pairings() {
        let legal = legal_genotypes(gt("A G"), gt("C T")).unwrap();
        assert!(legal.contains(&gt("A C").canonical()));
        assert!(legal.contains(&gt("A T").canonical()));
        assert!(legal.contains(&gt("C G").canonical()));
        assert!(legal.contains(&gt("G T").canonical()));
        assert_eq!(legal.len(), 4);
        assert!(!legal.contains(&gt("A A").canonical()));
    }

    #[test]
    fn test_child_allele_order_does_not_matter() {
        // legal pairing is A from mother, G from father; child stores "G A"
        let mut fam = family("A A", "G G", &["G A"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 0);
        assert_eq!(fam.children[0].genotypes[0], gt("G A"));
    }

    #[test]
    fn test_inconsistent_child_is_nulled_and_counted() {
        let mut fam = family("A A", "G G", &["A G", "T T", "C G"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 2);
        assert_eq!(fam.children[0].genotypes[0], gt("A G"));
        assert_eq!(fam.children[1].genotypes[0], Genotype::MISSING);
        assert_eq!(fam.children[2].genotypes[0], Genotype::MISSING);
    }

    #[test]
    fn test_missing_child_is_never_corrected() {
        let mut fam = family("A A", "A A", &["0 0"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 0);
        assert_eq!(fam.children[0].genotypes[0], Genotype::MISSING);
    }

    #[test]
    fn test_unknown_parent_accepts_any_base_pairing() {
        // C C shares no allele with the known father; the unknown mother is
        // treated as consistent with any allele
        let mut fam = family("0 0", "A A", &["C C", "G T"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 0);
        assert_eq!(fam.children[0].genotypes[0], gt("C C"));
        assert_eq!(fam.children[1].genotypes[0], gt("G T"));
    }

    #[test]
    fn test_unknown_parent_still_rejects_half_missing_child() {
        // "A 0" is not the missing sentinel, and no pairing produces a lone 0
        let mut fam = family("0 0", "A A", &["A 0"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 1);
        assert_eq!(fam.children[0].genotypes[0], Genotype::MISSING);
    }

    #[test]
    fn test_half_missing_parent_contributes_its_zero() {
        // father "A 0": the 0 participates in pairings like a real allele
        let mut fam = family("C C", "A 0", &["C 0", "A C", "C T"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 1);
        assert_eq!(fam.children[0].genotypes[0], gt("C 0"));
        assert_eq!(fam.children[1].genotypes[0], gt("A C"));
        assert_eq!(fam.children[2].genotypes[0], Genotype::MISSING);
    }

    #[test]
    fn test_half_missing_child_with_known_parents_is_corrected() {
        let mut fam = family("A A", "G G", &["A 0"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 1);
    }

    #[test]
    fn test_missing_parent_row_is_fatal() {
        let mut grouper = FamilyGrouper::new();
        grouper.push(row("F1 1F_c1_fam1 0 0 2 1 A A"), 1).unwrap();
        grouper.push(row("F1 2M_c1_fam1 1 2 1 1 A A"), 2).unwrap();
        let mut fam = grouper.finish().remove(0);
        let err = validate_family_column(&mut fam, 0).unwrap_err();
        match err {
            PedigreeError::IncompleteFamily { family_id, missing } => {
                assert_eq!(family_id, "fam1");
                assert_eq!(missing, "father");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_only_touches_the_given_column() {
        let mut fam = family("A A 0 0", "G G 0 0", &["T T C C"]);
        let corrected = validate_family_column(&mut fam, 0).unwrap();
        assert_eq!(corrected, 1);
        assert_eq!(fam.children[0].genotypes[0], Genotype::MISSING);
        // column 1 untouched even though both parents there are missing
        assert_eq!(fam.children[0].genotypes[1], gt("C C"));
    }
}
