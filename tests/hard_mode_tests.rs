use wordle_entropy::{FeedbackPattern, HardModeConstraints, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn after(guess: &str, answer: &str) -> HardModeConstraints {
    let mut constraints = HardModeConstraints::new();
    constraints.update(&w(guess), FeedbackPattern::calculate(&w(guess), &w(answer)));
    constraints
}

#[test]
fn test_new_constraints_allow_everything() {
    let constraints = HardModeConstraints::new();
    assert!(constraints.is_empty());
    assert!(constraints.is_legal(&w("QUIZZ")));
}

#[test]
fn test_green_constraints() {
    let constraints = after("CRANE", "CRATE");
    assert_eq!(constraints.green(0), Some(b'C'));
    assert_eq!(constraints.green(3), None);

    assert!(constraints.is_legal(&w("CRATE")));
    assert!(!constraints.is_legal(&w("TRACE")), "green violated");
    assert!(!constraints.is_legal(&w("CRANE")), "gray N reused");
}

#[test]
fn test_yellow_constraints() {
    let constraints = after("SPEED", "ERASE");

    assert!(constraints.is_legal(&w("ERASE")));
    assert!(constraints.is_legal(&w("ARISE")));
    assert!(!constraints.is_legal(&w("SEEMS")), "yellow S back at position 0");
    assert!(!constraints.is_legal(&w("ALIKE")), "yellow S missing");
    assert!(!constraints.is_legal(&w("ASKED")), "gray D reused");
}

#[test]
fn test_gray_duplicate_of_green_is_not_excluded() {
    let constraints = after("LEVEL", "HELLO");
    assert!(!constraints.is_excluded(b'E'));
    assert!(constraints.is_excluded(b'V'));
    assert!(constraints.is_legal(&w("HELLO")));
}

#[test]
fn test_gray_before_later_green_is_not_excluded() {
    let constraints = after("ABBBA", "CCCCA");
    assert!(!constraints.is_excluded(b'A'));
    assert!(constraints.is_excluded(b'B'));
    assert!(constraints.is_legal(&w("CCCCA")));
}

#[test]
fn test_constraints_accumulate() {
    let mut constraints = after("CRANE", "CIGAR");
    constraints.update(&w("FOCAL"), FeedbackPattern::calculate(&w("FOCAL"), &w("CIGAR")));

    assert!(constraints.is_legal(&w("CIGAR")));
    // N from the first turn stays excluded
    assert!(constraints.is_excluded(b'N'));
    assert!(constraints.is_excluded(b'F'));
    assert!(!constraints.is_legal(&w("CAIRN")));
}
