use clap::Parser;

use arb_proposal::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use arb_proposal::adapter::inbound::cli::output::{self, OutputConfig};
use arb_proposal::adapter::inbound::cli::{config, evaluate};
use arb_proposal::error::Result;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(&args.config, args.all),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
