mod cli;
mod commands;
mod context;
mod model;
mod signup;
mod store;
mod tags;
mod util;
mod vision;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::context::AppContext;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let context = AppContext::open(&cli.context);

    match cli.command {
        Commands::Init(args) => commands::init::run(&context, args),
        Commands::AddSite(args) => commands::site::add(&context, args),
        Commands::Import(args) => commands::import::run(&context, args),
        Commands::ListSites(args) => commands::site::list(&context, args),
        Commands::Signup(args) => commands::signup::run(&context, args),
        Commands::Assess(args) => {
            let vision = context.load_vision()?;
            commands::assess::run(&context, &vision, args)
        }
        Commands::Status(args) => {
            let vision = context.load_vision()?;
            commands::status::run(&context, &vision, args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
