// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for gvc
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use clap::Parser;

/// CLI argument parser
#[derive(Parser)]
#[command(name = "gvc", version, about = "Go Version Changer")]
pub struct Cli {
    /// Version to install (prompts interactively when omitted)
    #[arg(value_name = "VERSION")]
    pub target_version: Option<String>,

    /// List available stable versions and exit
    #[arg(short = 'l', long = "list", conflicts_with = "target_version")]
    pub list: bool,

    /// Remove the old installation outright instead of keeping a backup
    /// until extraction succeeds
    #[arg(short = 'd', long = "destructive")]
    pub destructive: bool,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,
}
