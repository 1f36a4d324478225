use std::io::BufRead;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use netfx_detect::report::Report;
use netfx_detect::source::{FixedSource, ReleaseKeySource, SourceError};
use netfx_detect::version::resolver::{Resolution, resolve};
use netfx_detect::version::table;

#[derive(Parser)]
#[command(name = "netfx-detect")]
#[command(version, about = "Detect the installed .NET Framework 4.5+ version from the registry")]
struct Cli {
    /// Resolve this release key instead of reading the registry
    #[arg(long, value_name = "RELEASE_KEY")]
    key: Option<i64>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the known release-key table and exit
    #[arg(long)]
    list: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    };

    if cli.pause {
        wait_for_enter();
    }

    code
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if cli.list {
        print_table(cli.json)?;
        return Ok(ExitCode::SUCCESS);
    }

    let lookup = match cli.key {
        Some(key) => FixedSource::new(key).release_key(),
        None => installed_release_key(),
    };

    let report = match lookup {
        Ok(key) => {
            debug!("resolving release key {key}");
            Report::from(resolve(key))
        }
        Err(SourceError::KeyPathNotFound { path }) => {
            // The v4 setup key does not exist on machines whose newest
            // framework predates 4.5; report that rather than failing.
            warn!("registry key not found: {path}");
            if !cli.json {
                println!("Couldn't find registry key.");
            }
            Report::from(Resolution::BelowKnownRange)
        }
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(exit_code_for(&err)));
        }
    };

    emit(&report, cli.json)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(windows)]
fn installed_release_key() -> Result<i64, SourceError> {
    use netfx_detect::source::registry::RegistrySource;

    RegistrySource::local_machine().release_key()
}

/// The registry only exists on Windows; other platforms must pass `--key`.
#[cfg(not(windows))]
fn installed_release_key() -> Result<i64, SourceError> {
    Err(SourceError::Unexpected(std::io::Error::other(
        "the Windows registry is unavailable on this platform; pass --key <RELEASE_KEY>",
    )))
}

fn emit(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn print_table(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<_> = table::entries()
            .iter()
            .map(|&(key, label)| serde_json::json!({ "key": key, "label": label }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for &(key, label) in table::entries() {
            println!("{key:>8}  {label}");
        }
    }
    Ok(())
}

/// Exit code per failure class. `KeyPathNotFound` never reaches here; it is
/// handled as a successful "older than 4.5" report.
fn exit_code_for(err: &SourceError) -> u8 {
    match err {
        SourceError::KeyPathNotFound { .. } => 0,
        SourceError::ValueNotFound { .. } | SourceError::WrongValueType { .. } => 2,
        SourceError::UnparsableValue { .. } => 3,
        SourceError::PermissionDenied { .. } => 4,
        SourceError::Unexpected(_) => 1,
    }
}

fn wait_for_enter() {
    println!("Press Enter to exit.");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SourceError::ValueNotFound { name: "Release".to_string() }, 2)]
    #[case(SourceError::WrongValueType {
        name: "Release".to_string(),
        found: "REG_BINARY".to_string(),
    }, 2)]
    #[case(SourceError::UnparsableValue {
        name: "Release".to_string(),
        raw: "not-a-number".to_string(),
    }, 3)]
    #[case(SourceError::PermissionDenied {
        path: r"HKEY_LOCAL_MACHINE\SOFTWARE".to_string(),
    }, 4)]
    #[case(SourceError::Unexpected(std::io::Error::other("boom")), 1)]
    fn failure_classes_map_to_distinct_exit_codes(#[case] err: SourceError, #[case] code: u8) {
        assert_eq!(exit_code_for(&err), code);
    }

    #[test]
    fn missing_key_path_maps_to_success() {
        // Handled before exit_code_for in run(), but the mapping stays 0 so a
        // future caller cannot turn the pre-4.5 report into a failure.
        let err = SourceError::KeyPathNotFound {
            path: r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft".to_string(),
        };
        assert_eq!(exit_code_for(&err), 0);
    }
}
