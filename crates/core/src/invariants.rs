//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::models::GuestEntry;
use crate::roster::Roster;

/// Validate that a roster is internally consistent
///
/// No two entries may share a name under case-insensitive comparison.
pub fn assert_roster_invariants(roster: &Roster) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut seen = HashSet::new();
    for entry in roster.entries() {
        assert_entry_invariants(entry);
        debug_assert!(
            seen.insert(entry.name.to_lowercase()),
            "Roster contains duplicate name {:?}",
            entry.name
        );
    }
}

/// Validate that a guest entry is well-formed
pub fn assert_entry_invariants(entry: &GuestEntry) {
    debug_assert!(
        !entry.name.trim().is_empty(),
        "Guest {} has empty name",
        entry.id
    );

    debug_assert!(
        entry.name.trim() == entry.name,
        "Guest {} has untrimmed name {:?}",
        entry.id,
        entry.name
    );

    if let Some(owner) = &entry.owner {
        debug_assert!(
            !owner.trim().is_empty(),
            "Guest {} has empty owner",
            entry.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Descriptor;

    fn make_entry(name: &str) -> GuestEntry {
        GuestEntry::new(
            name.to_string(),
            None,
            Descriptor::new("🚀", "Built Different", "The New Kid"),
        )
    }

    #[test]
    fn test_seeded_roster_is_valid() {
        assert_roster_invariants(&Roster::seeded());
    }

    #[test]
    fn test_valid_entry() {
        assert_entry_invariants(&make_entry("Athena"));
    }

    #[test]
    #[should_panic(expected = "empty name")]
    fn test_empty_name_caught() {
        assert_entry_invariants(&make_entry("   "));
    }

    #[test]
    #[should_panic(expected = "duplicate name")]
    fn test_duplicate_names_caught() {
        let mut roster = Roster::new();
        roster.push(make_entry("Athena"));
        roster.push(make_entry("ATHENA"));
        assert_roster_invariants(&roster);
    }
}
