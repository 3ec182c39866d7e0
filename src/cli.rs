use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Prebuild CocoaPods dependencies and rewrite the Podfile to consume them
#[derive(Parser, Debug)]
#[command(name = "pod-prebuild")]
#[command(version)]
#[command(about = "Prebuild CocoaPods dependencies and rewrite the Podfile to consume them", long_about = None)]
pub struct Args {
    /// Path to the directory holding the Podfile (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    /// Path to the configuration file (defaults to <path>/podbuilder.config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the Podfile entries for each pod, prebuilt where a framework exists
    Plan(PlanArgs),
    /// Install from Podfile.restore, then put the prebuilt Podfile back
    RestoreAll,
    /// Hard-reset a pod's git checkout to its pinned tag, commit or branch
    Checkout(CheckoutArgs),
}

#[derive(ClapArgs, Debug)]
pub struct PlanArgs {
    /// Pods to plan (defaults to every root pod plus split subspecs)
    #[arg(value_name = "POD")]
    pub pods: Vec<String>,

    /// Directory holding the *.podspec.json files (defaults to <path>/Specs)
    #[arg(short, long)]
    pub specs: Option<PathBuf>,

    /// Write synthetic podspecs to the prebuilt folder
    #[arg(short, long)]
    pub write: bool,

    /// Emit bare `pod '<name>'` entries without version or source pins
    #[arg(long)]
    pub no_version: bool,

    /// Local spec repository to read available versions from
    #[arg(long, value_name = "DIR")]
    pub spec_repo: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct CheckoutArgs {
    /// Full pod name, e.g. `Realm` or `Realm/Headers`
    pub pod: String,

    /// Git working tree of the pod
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Directory holding the *.podspec.json files (defaults to <path>/Specs)
    #[arg(short, long)]
    pub specs: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
