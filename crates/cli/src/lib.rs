mod config;
mod decompile;
mod locate;

use cfr_jump_core::settings::Settings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use config::ConfigCommands;

#[derive(Parser)]
#[command(
    name = "cfr-jump",
    version,
    about = "Jump from a Java or Kotlin source file to its decompiled class",
    long_about = "cfr-jump finds the compiled class file for a source file inside the project's \
                  build/ and out/ directories and decompiles it with CFR. The result is written \
                  to <project>/build/decompile/<Name>.java."
)]
pub struct Cli {
    /// Settings file (default: <config dir>/cfr-jump/settings.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Also print log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the compiled class file for a source file
    #[command(
        long_about = "Resolves a .java or .kt source file to its compiled .class file. Exits with \
                            status 1 when the project has not been built yet."
    )]
    Locate {
        /// The .java or .kt source file
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Project root (default: the Gradle/Maven project above SOURCE)
        #[arg(short, long, value_name = "PROJECT_PATH")]
        project: Option<PathBuf>,

        /// Class name to look up when SOURCE itself does not resolve
        #[arg(short, long)]
        symbol: Option<String>,
    },
    /// Decompile the class file compiled from a source file
    #[command(
        long_about = "Resolves the class file like `locate`, runs the configured CFR jar on it and \
                            writes the decompiled source to <project>/build/decompile/."
    )]
    Decompile {
        /// The .java or .kt source file
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Project root (default: the Gradle/Maven project above SOURCE)
        #[arg(short, long, value_name = "PROJECT_PATH")]
        project: Option<PathBuf>,

        /// Class name to look up when SOURCE itself does not resolve
        #[arg(short, long)]
        symbol: Option<String>,

        /// Print the decompiled source instead of the output path
        #[arg(long)]
        print: bool,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = cfr_jump_core::logging::init_logging("cli", cli.verbose);

    let settings_path = cli.settings.unwrap_or_else(Settings::default_path);

    match cli.command {
        Commands::Locate {
            source,
            project,
            symbol,
        } => locate::run(&source, project, symbol.as_deref()),
        Commands::Decompile {
            source,
            project,
            symbol,
            print,
        } => decompile::run(&settings_path, &source, project, symbol.as_deref(), print),
        Commands::Config { action } => config::run(&settings_path, action),
    }
}
