//! Exact-match and nearest-lower-bound resolution of release keys

use crate::version::table;

/// Outcome of resolving a release key against the known table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key matches a table entry exactly.
    Exact { label: &'static str },
    /// The key falls strictly between two consecutive known keys; `lower` is
    /// the nearest lower bound, `upper` the nearest upper bound.
    Between {
        lower: &'static str,
        upper: &'static str,
    },
    /// The key is newer than every known release; `label` names the newest
    /// known version, which the installation is at least.
    AtLeast { label: &'static str },
    /// The key predates every known release. The installed framework is older
    /// than the table's oldest version.
    BelowKnownRange,
}

/// Resolve a release key to a version label or a bounded best guess.
///
/// Pure and total: any `i64` (negative and zero included) yields a
/// `Resolution`. Unknown keys are bracketed by the nearest known keys rather
/// than rejected.
pub fn resolve(key: i64) -> Resolution {
    let entries = table::entries();

    match entries.binary_search_by_key(&key, |&(k, _)| k) {
        Ok(index) => Resolution::Exact {
            label: entries[index].1,
        },
        Err(0) => Resolution::BelowKnownRange,
        Err(index) if index == entries.len() => Resolution::AtLeast {
            label: table::newest().1,
        },
        Err(index) => Resolution::Between {
            lower: entries[index - 1].1,
            upper: entries[index].1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(378389, ".NET Framework 4.5")]
    #[case(393295, ".NET Framework 4.6 (Windows 10)")]
    #[case(528049, ".NET Framework 4.8")]
    #[case(528209, ".NET Framework 4.8 (Windows 10 May 2020 Update)")]
    fn known_keys_resolve_exactly(#[case] key: i64, #[case] label: &'static str) {
        assert_eq!(resolve(key), Resolution::Exact { label });
    }

    #[test]
    fn every_table_entry_resolves_to_its_own_label() {
        for &(key, label) in table::entries() {
            assert_eq!(resolve(key), Resolution::Exact { label });
        }
    }

    #[rstest]
    #[case(
        380000,
        ".NET Framework 4.5",
        ".NET Framework 4.5.1 (Windows 8.1 or Server 2012)"
    )]
    #[case(393296, ".NET Framework 4.6 (Windows 10)", ".NET Framework 4.6")]
    #[case(
        528041,
        ".NET Framework 4.8 (Windows 10 May 2019 Update and Windows 10 November 2019)",
        ".NET Framework 4.8"
    )]
    fn keys_between_entries_report_both_bounds(
        #[case] key: i64,
        #[case] lower: &'static str,
        #[case] upper: &'static str,
    ) {
        assert_eq!(resolve(key), Resolution::Between { lower, upper });
    }

    #[rstest]
    #[case(528210)]
    #[case(600000)]
    #[case(i64::MAX)]
    fn keys_above_the_newest_entry_report_a_lower_bound(#[case] key: i64) {
        assert_eq!(
            resolve(key),
            Resolution::AtLeast {
                label: ".NET Framework 4.8 (Windows 10 May 2020 Update)"
            }
        );
    }

    #[rstest]
    #[case(100000)]
    #[case(378388)]
    #[case(0)]
    #[case(-7)]
    #[case(i64::MIN)]
    fn keys_below_the_oldest_entry_are_distinguished(#[case] key: i64) {
        assert_eq!(resolve(key), Resolution::BelowKnownRange);
    }

    #[test]
    fn resolution_is_idempotent() {
        for key in [378389, 380000, 600000, 100000] {
            assert_eq!(resolve(key), resolve(key));
        }
    }
}
