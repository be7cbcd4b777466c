use olymper_problems::game;
use olymper_problems::runner::run_validator;

fn main() {
    run_validator(game::validate)
}
