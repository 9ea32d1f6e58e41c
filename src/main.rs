use clap::Parser;
use std::process;

use next_build_parser::cli::{Cli, Commands};
use next_build_parser::cmd;
use next_build_parser::error::ErrorFormatter;

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match cli.command {
        Some(Commands::Analyze {
            file,
            mode,
            limit,
            json,
            check,
        }) => cmd::cmd_analyze(&cmd::AnalyzeOptions {
            file,
            mode,
            limit,
            json,
            check,
        }),
        Some(Commands::Compare {
            before,
            after,
            json,
        }) => cmd::cmd_compare(&before, &after, json),
        Some(Commands::Init { force }) => cmd::cmd_init(force),
        Some(Commands::Settings { action }) => cmd::cmd_settings(&action),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => {
            println!("next-build-parser v{}", env!("CARGO_PKG_VERSION"));
            println!("Next.js build output analyzer\n");
            println!("Usage: next-build-parser <COMMAND>\n");
            println!("Commands:");
            println!("  analyze      Analyze a `next build` report");
            println!("  compare      Compare two build reports");
            println!("  init         Create .next-build-parser.toml");
            println!("  settings     Read or change persistent settings");
            println!("  completions  Generate shell completions");
            println!(
                "\nRun 'next-build-parser <COMMAND> --help' for more information on a command."
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
