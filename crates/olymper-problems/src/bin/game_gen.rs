use std::process::ExitCode;

use olymper_gen::cli::run_generator;
use olymper_problems::game;

fn main() -> ExitCode {
    run_generator(|ctx| game::generate(ctx))
}
