//! Simple question example: build an Ohm's-law question and grade answers.

use circuitquiz::prelude::*;
use std::path::Path;

fn main() -> Result<(), QuizError> {
    tracing_subscriber::fmt::init();

    // Optional options file as first argument
    let options = match std::env::args().nth(1) {
        Some(path) => QuizOptions::from_file(Path::new(&path))?,
        None => QuizOptions::default(),
    };
    let mut quiz = CircuitQuiz::new(options)?;

    let r = quiz.resistor(1000.0, 7000.0)?;
    let op = quiz.watt(r)?;

    println!(
        "A {}Ω resistor dissipates {}W. What is the current through it?",
        quiz.format(r),
        quiz.format(op.power)
    );
    println!();

    println!("Unit dropdown:");
    for option in quiz.unit_options("A", false, op.current)? {
        let marker = if option.correct { "*" } else { " " };
        println!("  {} {}", marker, option.unit);
    }
    println!();

    // A few typical submissions
    let shown = quiz.format(op.current);
    let (number, prefix) = shown.split_once(' ').unwrap_or((shown.as_str(), ""));
    let number: f64 = number.parse().unwrap_or(0.0);
    let submissions = [
        (number, format!("{}A", prefix)),
        (number * 1.05, format!("{}A", prefix)),
        (number, "A".to_string()),
        (number * 1.5, format!("{}A", prefix)),
    ];

    println!("Correct current: {}A", shown);
    for (answer, unit) in &submissions {
        let verdict = if quiz.check(op.current, *answer, unit) {
            "pass"
        } else {
            "fail"
        };
        println!("  {:>10.3} {:<3} -> {}", answer, unit, verdict);
    }

    Ok(())
}
