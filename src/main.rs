use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use recordbreak::config::Config;
use recordbreak::error::RbResult;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

const GREETING: &str = "Hello Rust!";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with loader/report settings; explicit flags win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count record breaks in a single sequence
    Count(cmd::count::CountArgs),
    /// Count record breaks for every sequence in a file
    Batch(cmd::batch::BatchArgs),
    /// Run the built-in sample sequences
    Sample(cmd::sample::SampleArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_base_config(path: Option<&str>) -> RbResult<Config> {
    match path {
        Some(path) => {
            info!("Loading config from: {}", path);
            Config::load_from_file(path)
        }
        None => Ok(Config::default()),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let (Some(command), Some((_, sub_matches))) = (cli.command, matches.subcommand()) else {
        println!("{}", GREETING);
        return;
    };

    let mut config = load_base_config(cli.config.as_deref()).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    // Only values typed on the command line override the base config.
    let result = match command {
        Commands::Count(args) => {
            config.report.merge_from_cli(&args.report, sub_matches);
            cmd::count::run(&args, &config.report)
        }
        Commands::Batch(args) => {
            config.merge_from_cli(&args.config, sub_matches);
            cmd::batch::run(&args, &config)
        }
        Commands::Sample(args) => {
            config.report.merge_from_cli(&args.report, sub_matches);
            cmd::sample::run(&args, &config.report)
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
