use anyhow::Result;
use clap::Parser;
use lpm::runtime::{RealRuntime, Runtime};
use std::path::PathBuf;

/// lpm - local package manager
///
/// Store package records (metadata plus files) in a repository directory
/// and install them, transitively resolving dependencies, into a separate
/// installation directory.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository root directory (also via LPM_REPO_ROOT)
    #[arg(
        long = "repo-root",
        env = "LPM_REPO_ROOT",
        value_name = "PATH",
        default_value = "repo_packages",
        global = true
    )]
    pub repo_root: PathBuf,

    /// Installation root directory (also via LPM_INSTALL_ROOT)
    #[arg(
        long = "install-root",
        env = "LPM_INSTALL_ROOT",
        value_name = "PATH",
        default_value = "installed_packages",
        global = true
    )]
    pub install_root: PathBuf,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a new package record in the repository
    Create(CreateArgs),

    /// List available packages
    List,

    /// Install a package and its dependencies
    Install(InstallArgs),

    /// Remove an installed package (all versions)
    Remove(RemoveArgs),
}

#[derive(clap::Args, Debug)]
struct CreateArgs {
    /// Package name
    name: String,

    /// Package version
    version: String,

    /// Dependency specifiers (e.g. "bar==2.0")
    #[arg(long, num_args = 0.., value_name = "SPEC")]
    dependencies: Vec<String>,

    /// Package files in the format filename=content
    #[arg(long, num_args = 0.., value_name = "FILE=CONTENT")]
    files: Vec<String>,
}

#[derive(clap::Args, Debug)]
struct InstallArgs {
    /// Package name
    name: String,

    /// Exact version to install (defaults to the first match)
    #[arg(long, value_name = "VERSION")]
    version: Option<String>,
}

#[derive(clap::Args, Debug)]
struct RemoveArgs {
    /// Package name
    name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    // Both roots exist for the lifetime of any command.
    runtime.create_dir_all(&cli.repo_root)?;
    runtime.create_dir_all(&cli.install_root)?;

    match cli.command {
        Commands::Create(args) => lpm::commands::create(
            &runtime,
            cli.repo_root,
            &args.name,
            &args.version,
            args.dependencies,
            &args.files,
        )?,
        Commands::List => lpm::commands::list(&runtime, cli.repo_root)?,
        Commands::Install(args) => lpm::commands::install(
            &runtime,
            cli.repo_root,
            cli.install_root,
            &args.name,
            args.version.as_deref(),
        )?,
        Commands::Remove(args) => {
            lpm::commands::remove(&runtime, cli.install_root, &args.name)?
        }
    }
    Ok(())
}
