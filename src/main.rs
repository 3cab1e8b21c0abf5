use std::io;
use std::process::ExitCode;

use messenger_cli::cli;
use messenger_cli::config::Config;
use messenger_cli::engine::http::MmpEngine;
use messenger_cli::ui::prompts::StdinLines;

fn main() -> ExitCode {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env();
    let engine = MmpEngine::new();
    let mut input = StdinLines::new();
    let mut stdout = io::stdout();

    ExitCode::from(cli::run(&tokens, &config, &engine, &mut input, &mut stdout))
}
