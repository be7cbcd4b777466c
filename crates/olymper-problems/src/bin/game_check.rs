use olymper_problems::game;
use olymper_problems::runner::run_checker;

fn main() {
    run_checker(|_inf, ouf, ans| game::check(ans, ouf))
}
