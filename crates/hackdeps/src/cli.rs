//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use hackdeps_core::config::DEFAULT_CONFIG_PATH;

/// hackdeps - checksum-pinned binary build dependencies
#[derive(Parser, Debug)]
#[command(name = "hackdeps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the dependency document
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dependency document location, falling back to the default
    pub fn config_path(&self) -> Utf8PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download, verify and install dependencies into a directory
    Install(InstallArgs),

    /// Bump dependencies to their latest upstream release
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Directory receiving the executables
    #[arg(short, long)]
    pub destination: Utf8PathBuf,

    /// Target operating system (defaults to the host)
    #[arg(long)]
    pub os: Option<String>,

    /// Target architecture (defaults to the host)
    #[arg(long)]
    pub arch: Option<String>,

    /// Install dev dependencies instead of prod ones
    #[arg(long)]
    pub dev: bool,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(subcommand)]
    pub command: Option<UpdateCommands>,
}

#[derive(Subcommand, Debug)]
pub enum UpdateCommands {
    /// Refresh checksums for the declared versions without bumping them
    SyncChecksums,
}
