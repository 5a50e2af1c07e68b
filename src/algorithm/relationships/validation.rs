//! Plausibility checks for a matched parent

use crate::error::{FamilyTreeError, ParentingViolation, Result};
use crate::models::Person;

/// Validate that `parent` could plausibly be a parent of `child`
///
/// The parent must have reached `min_age_years` on or before the child's
/// birth date, and must not have died before it. Dying on the birth date
/// itself is allowed.
pub fn validate_parent(parent: &Person, child: &Person, min_age_years: u32) -> Result<()> {
    let old_enough = parent
        .reaches_age_on(min_age_years)
        .is_some_and(|date| date <= child.birth_date);

    if !old_enough {
        return Err(violation(
            parent,
            child,
            ParentingViolation::TooYoung { min_age_years },
        ));
    }

    if parent
        .death_date
        .is_some_and(|death| death < child.birth_date)
    {
        return Err(violation(
            parent,
            child,
            ParentingViolation::DeceasedBeforeBirth,
        ));
    }

    Ok(())
}

fn violation(parent: &Person, child: &Person, violation: ParentingViolation) -> FamilyTreeError {
    FamilyTreeError::ParentingAge {
        parent: parent.full_name(),
        child: child.full_name(),
        violation,
    }
}
