//! Windows registry source for the release key
//!
//! The framework installer records the release key as the `Release` DWORD
//! under `HKLM\SOFTWARE\Microsoft\NET Framework Setup\NDP\v4\Full`. Each
//! subkey along the path is opened individually so a broken chain reports
//! exactly how far the walk got.

use std::io;

use tracing::debug;
use winreg::enums::{HKEY_LOCAL_MACHINE, RegType};
use winreg::types::FromRegValue;
use winreg::{RegKey, RegValue};

use crate::source::{ReleaseKeySource, SourceError};

/// Subkeys from the local-machine hive down to the v4 full-profile setup key.
const KEY_PATH: &[&str] = &[
    "SOFTWARE",
    "Microsoft",
    "NET Framework Setup",
    "NDP",
    "v4",
    "Full",
];

/// Name of the value holding the release key.
const VALUE_NAME: &str = "Release";

/// Reads the release key from the local machine's registry.
pub struct RegistrySource {
    root: RegKey,
}

impl RegistrySource {
    pub fn local_machine() -> Self {
        Self {
            root: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }

    /// Walk the setup-key path one subkey at a time, returning the opened key
    /// and the full path (used in permission errors on the value read).
    fn open_setup_key(&self) -> Result<(RegKey, String), SourceError> {
        let mut walked = String::from("HKEY_LOCAL_MACHINE");

        walked.push('\\');
        walked.push_str(KEY_PATH[0]);
        let mut key = open_step(&self.root, KEY_PATH[0], &walked)?;

        for part in &KEY_PATH[1..] {
            walked.push('\\');
            walked.push_str(part);
            key = open_step(&key, part, &walked)?;
        }

        Ok((key, walked))
    }
}

impl ReleaseKeySource for RegistrySource {
    fn release_key(&self) -> Result<i64, SourceError> {
        let (key, path) = self.open_setup_key()?;

        let raw = key
            .get_raw_value(VALUE_NAME)
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => SourceError::ValueNotFound {
                    name: VALUE_NAME.to_string(),
                },
                io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
                _ => SourceError::Unexpected(err),
            })?;

        decode_release_value(&raw)
    }
}

fn open_step(parent: &RegKey, name: &str, walked: &str) -> Result<RegKey, SourceError> {
    parent.open_subkey(name).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SourceError::KeyPathNotFound {
            path: walked.to_string(),
        },
        io::ErrorKind::PermissionDenied => SourceError::PermissionDenied {
            path: walked.to_string(),
        },
        _ => SourceError::Unexpected(err),
    })
}

/// Decode the `Release` value. DWORD is the documented shape; some tooling
/// writes it as a decimal string instead, so strings are parsed too.
fn decode_release_value(raw: &RegValue) -> Result<i64, SourceError> {
    match &raw.vtype {
        RegType::REG_DWORD => {
            let dword = u32::from_reg_value(raw).map_err(SourceError::Unexpected)?;
            Ok(i64::from(dword))
        }
        RegType::REG_SZ | RegType::REG_EXPAND_SZ => {
            debug!("release value is a string, attempting to interpret");
            let text = String::from_reg_value(raw).map_err(SourceError::Unexpected)?;
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .map_err(|_| SourceError::UnparsableValue {
                    name: VALUE_NAME.to_string(),
                    raw: trimmed.to_string(),
                })
        }
        other => Err(SourceError::WrongValueType {
            name: VALUE_NAME.to_string(),
            found: format!("{other:?}"),
        }),
    }
}
