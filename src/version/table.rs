//! Static table of known .NET Framework release keys
//!
//! The installer writes a single DWORD ("release key") per framework build.
//! Microsoft documents one or two keys per version: a Windows-specific key for
//! builds that shipped with an OS update, and a generic key for everything
//! else.

/// Known release keys, ascending by key. Keys are unique.
pub const ENTRIES: &[(i64, &str)] = &[
    (378389, ".NET Framework 4.5"),
    (378675, ".NET Framework 4.5.1 (Windows 8.1 or Server 2012)"),
    (378758, ".NET Framework 4.5.1"),
    (379893, ".NET Framework 4.5.2"),
    (393295, ".NET Framework 4.6 (Windows 10)"),
    (393297, ".NET Framework 4.6"),
    (394254, ".NET Framework 4.6.1 (Windows 10 November Update)"),
    (394271, ".NET Framework 4.6.1"),
    (
        394802,
        ".NET Framework 4.6.2 (Windows 10 Anniversary Update or Windows Server 2016)",
    ),
    (394806, ".NET Framework 4.6.2"),
    (460798, ".NET Framework 4.7 (Windows 10 Creators Update)"),
    (460805, ".NET Framework 4.7"),
    (
        461308,
        ".NET Framework 4.7.1 (Windows 10 Fall Creators Update or Windows Server)",
    ),
    (461310, ".NET Framework 4.7.1"),
    (
        461808,
        ".NET Framework 4.7.2 (Windows 10 April 2018 Update or Windows Server)",
    ),
    (461814, ".NET Framework 4.7.2"),
    (
        528040,
        ".NET Framework 4.8 (Windows 10 May 2019 Update and Windows 10 November 2019)",
    ),
    (528049, ".NET Framework 4.8"),
    (528209, ".NET Framework 4.8 (Windows 10 May 2020 Update)"),
];

/// All known entries, ascending by key.
pub fn entries() -> &'static [(i64, &'static str)] {
    ENTRIES
}

/// Look up the label for an exactly matching release key.
pub fn label_for(key: i64) -> Option<&'static str> {
    ENTRIES
        .binary_search_by_key(&key, |&(k, _)| k)
        .ok()
        .map(|index| ENTRIES[index].1)
}

/// The oldest release key the table knows about.
pub fn oldest() -> (i64, &'static str) {
    ENTRIES[0]
}

/// The newest release key the table knows about.
pub fn newest() -> (i64, &'static str) {
    ENTRIES[ENTRIES.len() - 1]
}
