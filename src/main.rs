use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pcre2_vendor::{AppError, CodeUnitWidth, CommandOptions};

#[derive(Parser)]
#[command(name = "pcre2-vendor")]
#[command(version)]
#[command(
    about = "Vendor the PCRE2 C library into a MoonBit package and publish it",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,
    /// Configuration file, relative to the project root
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and extract the PCRE2 release tarball
    Fetch {
        #[command(flatten)]
        global: GlobalArgs,
    },
    /// Fetch the release and vendor its sources into the package
    #[clap(visible_alias = "p")]
    Prepare {
        #[command(flatten)]
        global: GlobalArgs,
        /// Code unit width: 8, 16 or 32
        #[arg(short, long, value_parser = parse_width)]
        width: Option<CodeUnitWidth>,
    },
    /// Stage, test and publish the package
    Publish {
        #[command(flatten)]
        global: GlobalArgs,
    },
}

fn parse_width(value: &str) -> Result<CodeUnitWidth, String> {
    let bits: u32 = value.parse().map_err(|_| format!("'{}' is not a number", value))?;
    CodeUnitWidth::try_from(bits).map_err(|e| e.to_string())
}

fn options(global: GlobalArgs, code_unit_width: Option<CodeUnitWidth>) -> CommandOptions {
    CommandOptions { root: global.root, config: global.config, code_unit_width }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Fetch { global } => pcre2_vendor::fetch(&options(global, None)).map(|_| ()),
        Commands::Prepare { global, width } => {
            pcre2_vendor::prepare(&options(global, width)).map(|_| ())
        }
        Commands::Publish { global } => pcre2_vendor::publish(&options(global, None)).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
