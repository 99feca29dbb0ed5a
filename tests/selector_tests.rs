use wordle_entropy::selector::{self, POOL_SHRINK_THRESHOLD};
use wordle_entropy::{
    Candidates, Error, FeedbackPattern, GameModel, GameSession, HardModeConstraints, Move, Word,
};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| Word::parse(s).unwrap()).collect()
}

fn model(guesses: &[&str], solutions: &[&str]) -> GameModel {
    GameModel::from_words(words(guesses), words(solutions)).unwrap()
}

fn all_rows(model: &GameModel) -> Vec<usize> {
    (0..model.guesses().len()).collect()
}

#[test]
fn test_score_is_sum_of_squared_buckets() {
    let model = model(&["ABCDE", "FGHIJ"], &["ABCDE", "ABCDF", "ABCDG"]);
    let cand = [0, 1, 2];
    // ABCDE: {242}, {80, 80}
    assert_eq!(selector::score(model.table().row(0), &cand), 1 + 4);
    // FGHIJ: all three apart
    assert_eq!(selector::score(model.table().row(1), &cand), 3);
}

#[test]
fn test_two_candidates_pick_lexically_first() {
    let model = model(&["ABCDF", "ABCDE", "XYZZY"], &["ABCDE", "ABCDF"]);
    let candidates = Candidates::all(2);
    let pool = selector::guess_pool(&model, &candidates, None).unwrap();

    // below the threshold only candidates are scored
    assert_eq!(pool, vec![1, 0]);

    let best = selector::best_guess(&model, &candidates, &pool).unwrap();
    assert_eq!(best.word.as_str(), "ABCDE");
    assert_eq!(best.score, 2);
    assert_eq!(best.expected_remaining, 1.0);
    assert!((best.entropy - 1.0).abs() < 1e-9);
    assert!(best.is_possible_answer);
}

#[test]
fn test_full_pool_prefers_splitting_word() {
    let model = model(&["ABCDE", "FGHIJ"], &["ABCDE", "ABCDF", "ABCDG"]);
    let candidates = Candidates::all(3);

    let best = selector::best_guess(&model, &candidates, &all_rows(&model)).unwrap();
    assert_eq!(best.word.as_str(), "FGHIJ");
    assert_eq!(best.score, 3);
    assert!(!best.is_possible_answer);

    // the session restricts the pool to candidates this late
    let session = GameSession::new(&model, false);
    match session.next_move().unwrap() {
        Move::Guess(guess) => assert_eq!(guess.word.as_str(), "ABCDE"),
        other => panic!("unexpected move {other:?}"),
    }
}

#[test]
fn test_ties_prefer_distinct_letters_over_alphabet() {
    let model = model(&["FFGGH", "FGHIJ"], &["ABCDE", "ABCDF", "ABCDG"]);
    let candidates = Candidates::all(3);
    let rows = all_rows(&model);
    let cand = candidates.indices();

    assert_eq!(
        selector::score(model.table().row(0), &cand),
        selector::score(model.table().row(1), &cand)
    );
    let best = selector::best_guess(&model, &candidates, &rows).unwrap();
    assert_eq!(best.word.as_str(), "FGHIJ");
}

#[test]
fn test_selection_is_deterministic() {
    let guesses = &["CRANE", "SLATE", "TRACE", "CRATE", "RAISE", "ARISE", "STARE", "ROAST", "TOAST", "BEAST"];
    let model = model(guesses, guesses);
    let candidates = Candidates::all(guesses.len());
    let rows = all_rows(&model);

    let first = selector::best_guess(&model, &candidates, &rows).unwrap();
    for _ in 0..20 {
        assert_eq!(selector::best_guess(&model, &candidates, &rows).unwrap(), first);
    }

    let mut reversed = rows.clone();
    reversed.reverse();
    assert_eq!(selector::best_guess(&model, &candidates, &reversed).unwrap(), first);
    assert_eq!(selector::top_guesses(&model, &candidates, &rows, 3)[0], first);
}

#[test]
fn test_top_guesses_are_sorted() {
    let guesses = &["CRANE", "SLATE", "TRACE", "CRATE", "RAISE", "ARISE", "STARE", "ROAST", "TOAST", "BEAST"];
    let model = model(guesses, guesses);
    let candidates = Candidates::all(guesses.len());

    let top = selector::top_guesses(&model, &candidates, &all_rows(&model), 5);
    assert_eq!(top.len(), 5);
    for pair in top.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
}

#[test]
fn test_large_candidate_sets_use_every_guess() {
    // 60 solutions ZZZ?? so the threshold is crossed
    let solutions: Vec<String> = (0..60)
        .map(|i| {
            let a = char::from(b'A' + (i / 26) as u8);
            let b = char::from(b'A' + (i % 26) as u8);
            format!("ZZZ{a}{b}")
        })
        .collect();
    let solutions: Vec<&str> = solutions.iter().map(String::as_str).collect();
    assert!(solutions.len() >= POOL_SHRINK_THRESHOLD);

    let mut guesses = vec!["QQQQQ"];
    guesses.extend(&solutions);
    let model = model(&guesses, &solutions);

    let pool = selector::guess_pool(&model, &Candidates::all(solutions.len()), None).unwrap();
    assert_eq!(pool.len(), guesses.len());
}

#[test]
fn test_filter_keeps_matching_codes() {
    let model = model(&["CRANE"], &["CRATE", "TRACE", "CRANE", "GRATE"]);
    let candidates = Candidates::all(4);
    let row = model.table().row(0);

    let narrowed = candidates.filter(row, model.table().get(0, 0));
    assert_eq!(narrowed.indices(), vec![0]);
    assert_eq!(narrowed.sole(), Some(0));
    assert!(!narrowed.contains(1));

    let none = narrowed.filter(row, model.table().get(0, 2));
    assert!(none.is_empty());
}

#[test]
fn test_small_pool_falls_back_to_every_guess() {
    // no solution is an allowed guess
    let model = model(&["GHIJK", "ABCDX"], &["ABCDE", "ABCDF"]);
    let candidates = Candidates::all(2);
    assert!(candidates.len() < POOL_SHRINK_THRESHOLD);

    let pool = selector::guess_pool(&model, &candidates, None).unwrap();
    assert_eq!(pool, all_rows(&model));

    // both rows leave the pair together, ABCDX wins alphabetically
    let best = selector::best_guess(&model, &candidates, &pool).unwrap();
    assert_eq!(best.word.as_str(), "ABCDX");
    assert_eq!(best.score, 4);
    assert!(!best.is_possible_answer);
}

#[test]
fn test_hard_mode_fallback_keeps_only_legal_guesses() {
    let model = model(&["GHIJK", "ABCDX"], &["ABCDE", "ABCDF"]);
    let candidates = Candidates::all(2);
    let mut constraints = HardModeConstraints::new();

    constraints.update(&Word::parse("GHIJK").unwrap(), FeedbackPattern(0));
    let pool = selector::guess_pool(&model, &candidates, Some(&constraints)).unwrap();
    assert_eq!(pool, vec![1]);

    constraints.update(&Word::parse("ABCDX").unwrap(), FeedbackPattern(0));
    assert!(matches!(
        selector::guess_pool(&model, &candidates, Some(&constraints)),
        Err(Error::NoLegalGuess)
    ));
}
