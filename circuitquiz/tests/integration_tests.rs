//! Integration tests for circuitquiz

use circuitquiz::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_course_options() {
    let options = QuizOptions::from_file(&fixture_path("course_options.json"))
        .expect("Should load options");

    assert_eq!(options.tolerance, 0.05);
    assert_eq!(options.power_limit, 0.5);
    assert_eq!(options.series, ESeries::E12);
    assert_eq!(
        options.single_unit_tagging,
        SingleUnitTagging::MatchMagnitude
    );
}

#[test]
fn test_partial_options_fill_defaults() {
    let options = QuizOptions::from_file(&fixture_path("partial_options.json"))
        .expect("Should load options");

    assert_eq!(options.series, ESeries::E24);
    assert_eq!(options.tolerance, 0.10);
    assert_eq!(options.power_limit, 0.25);
}

#[test]
fn test_invalid_options_file() {
    let result = QuizOptions::from_file(&fixture_path("invalid_tolerance.json"));
    assert!(
        matches!(result, Err(QuizError::InvalidTolerance(_))),
        "Negative tolerance should be rejected"
    );
}

#[test]
fn test_missing_options_file() {
    let result = QuizOptions::from_file(&PathBuf::from("not_a_real_file.json"));
    assert!(matches!(result, Err(QuizError::Io(_))), "Should fail on nonexistent file");
}

#[test]
fn test_options_written_then_loaded() {
    let options = QuizOptions {
        tolerance: 0.02,
        series: ESeries::E96,
        ..QuizOptions::default()
    };
    let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
    file.write_all(serde_json::to_string_pretty(&options).unwrap().as_bytes())
        .expect("Should write options");

    let loaded = QuizOptions::from_file(file.path()).expect("Should load written options");
    assert_eq!(loaded, options);
}

#[test]
fn test_course_options_drive_quiz() {
    let options = QuizOptions::from_file(&fixture_path("course_options.json")).unwrap();
    let mut quiz = CircuitQuiz::with_seed(options, 2023).unwrap();

    for _ in 0..50 {
        let r = quiz.resistor(100.0, 1000.0).unwrap();
        assert!(ESeries::E12.contains(r), "{} should be an E12 value", r);

        let op = quiz.watt(r).unwrap();
        assert!(op.power < 0.5);
    }

    // 5% tolerance from the options file
    assert!(quiz.check(10.0, 10.4, " "));
    assert!(!quiz.check(10.0, 10.6, " "));
}

#[test]
fn test_resistor_question_end_to_end() {
    let mut quiz = CircuitQuiz::with_seed(QuizOptions::default(), 17).unwrap();

    let r = quiz.resistor(1000.0, 7000.0).unwrap();
    let op = quiz.watt(r).unwrap();
    let r_str = quiz.format(r) + "Ω";
    assert!(r_str.ends_with(" kΩ"), "{}", r_str);

    // The student reads the current off the display string and answers in mA.
    let shown = quiz.format(op.current);
    let (number, prefix) = shown.split_once(' ').unwrap();
    let number: f64 = number.parse().unwrap();
    let unit = format!("{}A", prefix);
    assert!(comp_ans(op.current, number, &unit));

    let dropdown = quiz.unit_options("A", false, op.current).unwrap();
    let tagged: Vec<_> = dropdown.iter().filter(|o| o.correct).collect();
    assert_eq!(tagged.len(), 1);
    assert!(tagged[0].unit.ends_with('A'));
}

#[test]
fn test_seeded_free_functions_match_quiz() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(5);
    let mut quiz = CircuitQuiz::with_seed(QuizOptions::default(), 5).unwrap();

    let a = gen_resistor(&mut rng, 10.0, 1000.0, ESeries::E6).unwrap();
    let b = quiz.resistor(10.0, 1000.0).unwrap();
    assert_eq!(a, b);

    let a = gen_num(&mut rng, 1.0, 100.0, Prefix::Micro).unwrap();
    let b = quiz.number(1.0, 100.0, Prefix::Micro).unwrap();
    assert_eq!(a, b);
}
