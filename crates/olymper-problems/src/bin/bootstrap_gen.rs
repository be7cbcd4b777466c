use std::process::ExitCode;

use olymper_gen::cli::run_generator;
use olymper_problems::bootstrap;

fn main() -> ExitCode {
    run_generator(|ctx| bootstrap::generate(ctx))
}
