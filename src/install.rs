// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Installation of a downloaded toolchain archive
//!
//! Replaces the live installation with the contents of the scratch
//! archive using one of two strategies. Extraction failure is fatal and
//! leaves the archive on disk so the operator can inspect it.

use std::process::Output;

use crate::config::{Config, InstallStrategy};
use crate::error::UpdateError;
use crate::process::CommandRunner;

/// Installs the downloaded archive over the existing toolchain
pub struct Installer<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a Config,
}

impl<'a, R: CommandRunner> Installer<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config) -> Self {
        Self { runner, config }
    }

    /// Replace the existing installation with the scratch archive
    ///
    /// Backup strategy: move the old installation to the backup path,
    /// extract, then remove the backup. When the move fails nothing is
    /// extracted, so the live tree is never unpacked over.
    ///
    /// Destructive strategy: remove the old installation, then extract.
    ///
    /// # Errors
    /// Returns [`UpdateError::Process`] naming the failed command.
    pub fn install(&self) -> Result<(), UpdateError> {
        match self.config.strategy {
            InstallStrategy::Backup => {
                self.move_old_version()?;
                self.extract_archive()?;
                self.remove_backup()?;
            }
            InstallStrategy::Destructive => {
                self.remove_old_version()?;
                self.extract_archive()?;
            }
        }
        Ok(())
    }

    fn move_old_version(&self) -> Result<(), UpdateError> {
        let install_root = self.config.install_root.display().to_string();
        let backup_dir = self.config.backup_dir.display().to_string();
        self.run("mv", &[install_root.as_str(), backup_dir.as_str()])?;
        println!("Moved previous installation to: {backup_dir}");
        Ok(())
    }

    fn remove_old_version(&self) -> Result<(), UpdateError> {
        let install_root = self.config.install_root.display().to_string();
        self.run("rm", &["-rf", install_root.as_str()])?;
        println!("Removed previous installation.");
        Ok(())
    }

    fn extract_archive(&self) -> Result<(), UpdateError> {
        let extract_dir = self.config.extract_dir.display().to_string();
        let scratch = self.config.scratch_file.display().to_string();
        self.run("tar", &["-C", extract_dir.as_str(), "-xzf", scratch.as_str()])?;
        println!("Extracted the new version.");
        Ok(())
    }

    fn remove_backup(&self) -> Result<(), UpdateError> {
        let backup_dir = self.config.backup_dir.display().to_string();
        self.run("rm", &["-rf", backup_dir.as_str()])?;
        println!("Removed the backup of the previous installation.");
        Ok(())
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<Output, UpdateError> {
        self.runner
            .run(program, args)
            .map_err(|source| UpdateError::Process {
                command: program.to_string(),
                source,
            })
    }
}
