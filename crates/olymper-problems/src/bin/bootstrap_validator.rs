use olymper_problems::bootstrap;
use olymper_problems::runner::run_validator;

fn main() {
    run_validator(bootstrap::validate)
}
