// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Go Version Changer (gvc) - Main Application
//!
//! This is the main entry point for the gvc CLI tool, which replaces the
//! Go toolchain under /usr/local/go with a release picked from the
//! official download site.
//!
//! The application supports:
//! - Listing the published stable versions
//! - Prompting interactively for a target version (or taking it as an
//!   argument)
//! - Streaming the release archive to a scratch file
//! - Replacing the installation with a backup-then-extract or a
//!   remove-then-extract strategy

use std::fs::{self, File};
use std::io;
use std::process::exit;

use clap::Parser;

mod cli;
use cli::Cli;

use gvc::{
    Config, Installer, InstallStrategy, Platform, Selection, UpdateError,
    download_archive, extract_go_version, fetch_stable_versions, prompt_version,
    resolve_selection,
};
use gvc::process::{CommandRunner, SystemRunner};

/// Main application entry point
///
/// Parses command line arguments, runs the pipeline, and maps any
/// failure to a human-readable message on stderr plus a non-zero exit
/// code.
fn main() {
    let cli = Cli::parse();

    let mut config = Config::default();
    if cli.destructive {
        config.strategy = InstallStrategy::Destructive;
    }

    let runner = SystemRunner;

    let result = if cli.list {
        cmd_list(&config)
    } else {
        cmd_update(&cli, &config, &runner)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        exit(e.exit_code());
    }
}

/// Print the available stable versions, newest first
fn cmd_list(config: &Config) -> Result<(), UpdateError> {
    let versions = fetch_stable_versions(&config.catalog_url)?;
    for version in &versions {
        println!("{version}");
    }
    Ok(())
}

/// Run the full update pipeline: fetch, select, download, install
///
/// Control flows strictly top to bottom; the first failure aborts the
/// run. Selecting the version that is already active ends the run
/// successfully without touching the network or filesystem again.
fn cmd_update<R: CommandRunner>(
    cli: &Cli,
    config: &Config,
    runner: &R,
) -> Result<(), UpdateError> {
    let versions = fetch_stable_versions(&config.catalog_url)?;

    let current = detect_current_version(runner);
    match &current {
        Some(version) => println!("Current version: {version}"),
        None => println!("Current version: none detected"),
    }
    println!("Versions: {}", versions.join(", "));

    let choice = match &cli.target_version {
        Some(version) => version.trim().to_string(),
        None => {
            let stdin = io::stdin();
            prompt_version(&mut stdin.lock(), &mut io::stdout()).map_err(UpdateError::Prompt)?
        }
    };

    match resolve_selection(&versions, &choice, current.as_deref())? {
        Selection::AlreadyInstalled => {
            println!("Version already installed.");
            Ok(())
        }
        Selection::Install(version) => install_version(&version, config, runner, cli.verbose),
    }
}

/// Download the archive for `version` and replace the installation
fn install_version<R: CommandRunner>(
    version: &str,
    config: &Config,
    runner: &R,
    verbose: bool,
) -> Result<(), UpdateError> {
    let platform = Platform::detect();
    let url = platform.build_download_url(&config.download_base, version);

    if verbose {
        eprintln!("Downloading from: {url}");
    }

    // The scratch file handle is dropped before extraction; on failure
    // the partial file stays on disk for inspection.
    let mut scratch = File::create(&config.scratch_file).map_err(UpdateError::Write)?;
    let bytes = download_archive(&url, &mut scratch)?;
    drop(scratch);

    if verbose {
        eprintln!("Saved {bytes} bytes to: {}", config.scratch_file.display());
    }

    Installer::new(runner, config).install()?;

    fs::remove_file(&config.scratch_file).map_err(UpdateError::Write)?;

    println!("Done. Run 'go version' to confirm the installation.");
    Ok(())
}

/// Probe the currently active toolchain version, if any
///
/// Locates `go` in the PATH and parses the output of `go version`. A
/// missing or broken toolchain is not an error; it only disables the
/// already-installed short-circuit.
fn detect_current_version<R: CommandRunner>(runner: &R) -> Option<String> {
    let go = which::which("go").ok()?;
    let output = runner.run(go.to_str()?, &["version"]).ok()?;
    extract_go_version(&String::from_utf8_lossy(&output.stdout))
}
