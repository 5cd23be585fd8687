//! End-to-end demo: load a problem, render it for a few seeds, grade answers.
//!
//! Run with: `cargo run --example targeted_feedback [path/to/problem.json]`
//!
//! Without an argument the bundled `demos/problems/answer_pool.json` is used.
//!
//! Env variables:
//!   LOG_LEVEL  : tracing filter, e.g. "debug" or "capa_answer_pool=debug"
//!   LOG_FORMAT : "pretty" (default) or "json"

use capa_answer_pool::{
    Problem, ProblemDefinition, RenderedResponse, Seed, StudentAnswer, StudentAnswers,
};
use tracing_subscriber::EnvFilter;

const BUNDLED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/problems/answer_pool.json");

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info,capa_answer_pool=debug"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

fn print_response(r: &RenderedResponse) {
    println!("  [{}] {}", r.response_id, r.prompt);
    for c in &r.choices {
        let marker = if r.selected.contains(&c.name) { ">" } else { " " };
        println!("    {marker} {:<9} {}", c.name, c.text);
    }
    for f in &r.feedback {
        println!("      feedback ({}): {}", f.explanation_id, f.text);
    }
    for s in &r.solutions {
        println!("      solution ({}): {}", s.explanation_id, s.text);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let path = std::env::args().nth(1).unwrap_or_else(|| BUNDLED.to_string());
    let definition = ProblemDefinition::from_path(&path)?;
    let problem = Problem::from_definition(&definition)?;

    // ── Same problem, different seeds ────────────────────────────────────────
    for seed in [723u64, 9, 56] {
        let seed = Seed(seed);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  {}  seed={seed}", problem.id());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        // Answer every response with the first presented choice.
        let selections = problem.select_all(seed)?;
        let answers: StudentAnswers = problem
            .responses()
            .iter()
            .zip(&selections)
            .map(|(r, sel)| {
                let first = sel.choices.first().map(|c| c.name.clone()).unwrap_or_default();
                (r.id().to_string(), StudentAnswer::Single(first))
            })
            .collect();

        let rendered = problem.render(seed, &answers, true)?;
        for r in &rendered.responses {
            print_response(r);
        }

        let grade = problem.grade(seed, &answers)?;
        println!("  Score: {}/{}", grade.score, grade.max_score);
        println!();
    }

    Ok(())
}
