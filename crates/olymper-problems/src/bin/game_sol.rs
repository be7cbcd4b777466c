use olymper_problems::game;
use olymper_problems::runner::run_solution;

fn main() {
    run_solution(|inf| game::solve(inf).map(|answers| game::render_answers(&answers)))
}
