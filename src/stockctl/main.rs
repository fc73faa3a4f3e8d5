use clap::Parser;
use stockctl::api::StockApi;
use stockctl::input::StdinInput;

mod args;
mod cli;

use args::Cli;

fn main() {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let mut api = StockApi::new();
    let mut input = StdinInput;
    if let Err(e) = cli::run_loop(&mut api, &mut input) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
