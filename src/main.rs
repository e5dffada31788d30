use clap::{ArgAction, Args, Parser, Subcommand};
use sealpack::cli::{
    default_opened_output, open_file, seal_files, show_info, OpenOptions, SealOptions,
    DEFAULT_SEALED_OUTPUT,
};
use sealpack::{SealKey, SealpackError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{prelude::*, EnvFilter};
use zeroize::Zeroizing;

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROFILE: &str = env!("SEALPACK_PROFILE");
const GIT_HASH: &str = env!("SEALPACK_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "sealpack")]
#[command(author, about = "Pack files into an archive sealed with AES-256-GCM", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Archive files and seal the archive
    #[command(alias = "s")]
    Seal {
        #[command(flatten)]
        key: KeyArgs,

        /// Output sealed file
        #[arg(long, short, default_value = DEFAULT_SEALED_OUTPUT)]
        out: PathBuf,

        /// Files to archive, stored under the names given here
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Open a sealed file and recover the archive
    #[command(alias = "o")]
    Open {
        #[command(flatten)]
        key: KeyArgs,

        /// Output archive (defaults to <INPUT> without .aes)
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Sealed input file
        input: PathBuf,
    },

    /// Show the layout of a sealed file (no key needed)
    #[command(alias = "i")]
    Info {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Sealed file to inspect
        file: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key string, exactly 32 bytes
    #[arg(long, env = "SEALPACK_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Key as 64 hex digits
    #[arg(long, env = "SEALPACK_KEY_HEX", hide_env_values = true)]
    key_hex: Option<String>,
}

impl KeyArgs {
    fn into_key(self) -> sealpack::Result<SealKey> {
        let key = self.key.map(Zeroizing::new);
        let key_hex = self.key_hex.map(Zeroizing::new);
        match (key, key_hex) {
            (Some(key), _) => SealKey::from_passphrase(&key),
            (None, Some(encoded)) => SealKey::from_hex(&encoded),
            (None, None) => Err(SealpackError::InvalidKey(0)),
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(command: Commands) -> sealpack::Result<()> {
    match command {
        Commands::Seal { key, out, files } => {
            let options = SealOptions {
                key: key.into_key()?,
            };
            let summary = seal_files(&files, &out, &options)?;
            println!(
                "Sealed {} files into {}",
                summary.entries,
                out.display()
            );
            Ok(())
        }

        Commands::Open { key, out, input } => {
            let options = OpenOptions {
                key: key.into_key()?,
            };
            let output_path = out.unwrap_or_else(|| default_opened_output(&input));
            open_file(&input, &output_path, &options)?;
            println!("Opened {} into {}", input.display(), output_path.display());
            Ok(())
        }

        Commands::Info { json, file } => {
            print!("{}", show_info(&file, json)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle --version flag
    if cli.version {
        println!("sealpack {}", get_version());
        return ExitCode::SUCCESS;
    }

    let Some(command) = cli.command else {
        // Show help when no command provided
        use clap::CommandFactory;
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        println!();
        return ExitCode::SUCCESS;
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
