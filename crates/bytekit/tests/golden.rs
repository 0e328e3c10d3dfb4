//! Golden vectors and end-to-end flows through the facade.

use bytekit::{
    copy_n, read_to_vec, CheckSession, LineRules, ReaderSource, SliceSource, SourceReader,
    ToolkitConfig, ToolkitError,
};
use bytekit_testkit::vectors::{check_vectors, limit_vectors, run_limit_vector, verify_all_vectors};
use std::io::Read;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn golden_vectors_match() {
    init_tracing();
    let results = verify_all_vectors();
    assert_eq!(results.len(), check_vectors().len() + limit_vectors().len());
    for (name, matches, actual) in results {
        assert!(matches, "vector '{name}' produced '{actual}'");
    }
}

#[test]
fn limit_vectors_through_copy_n() {
    for vector in limit_vectors() {
        let mut src = SliceSource::from_static(vector.data);
        let mut out = Vec::new();
        copy_n(&mut src, &mut out, vector.budget).unwrap();
        assert_eq!(hex::encode(&out), vector.expected_hex, "{}", vector.name);
        assert_eq!(run_limit_vector(&vector), vector.expected_hex);
    }
}

#[test]
fn std_reader_through_limit_to_sink() {
    init_tracing();
    let reader = "some io.Reader stream to be read\n".as_bytes();
    let mut src = ReaderSource::new(reader);
    let mut out = Vec::new();
    assert_eq!(copy_n(&mut src, &mut out, 4).unwrap(), 4);
    assert_eq!(out, b"some");
}

#[test]
fn bounded_generator_as_std_reader() {
    let mut a = Vec::new();
    SourceReader::new(bytekit::limit(bytekit::random_bytes(-3), 50))
        .read_to_end(&mut a)
        .unwrap();
    let b = read_to_vec(&mut bytekit::limit(bytekit::random_bytes(-3), 50)).unwrap();
    assert_eq!(a.len(), 50);
    assert_eq!(b.len(), 50);
}

#[test]
fn config_from_json() {
    let config: ToolkitConfig =
        serde_json::from_str(r#"{"rules": {"min_spaces": 1}, "quit_command": "quit"}"#).unwrap();
    assert_eq!(config.rules.min_spaces, 1);
    assert_eq!(config.rules.char_limit, 20);
    assert_eq!(config.quit_command, "quit");
    assert_eq!(config.copy_buffer_size, bytekit::DEFAULT_COPY_BUFFER);

    let err = LineRules::from_json("{not json").map_err(ToolkitError::from).unwrap_err();
    assert!(matches!(err, ToolkitError::Config(_)));
}

#[test]
fn session_over_scripted_input() {
    init_tracing();
    let input = "a b c\n1234567890 1234567890\nhello\nq\n";
    let mut out = Vec::new();
    let summary = CheckSession::default()
        .run(&mut input.as_bytes(), &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let reports: Vec<_> = text
        .split("Enter string (to quit press q): ")
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(
        reports,
        vec![
            "The string passed the check\n",
            "Line is too long;found numbers;no 2 spaces\n",
            "no 2 spaces\n",
        ]
    );
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
}
