use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_entropy::{GameModel, GameSession, PatternTable, Word};

/// Deterministic pseudo-words so the bench needs no word list files.
fn synthetic_words(count: usize, seed: u64) -> Vec<Word> {
    let mut state = seed;
    let mut words = Vec::with_capacity(count);
    while words.len() < count {
        let mut letters = String::with_capacity(5);
        for _ in 0..5 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            letters.push(char::from(b'A' + ((state >> 33) % 26) as u8));
        }
        if let Ok(word) = Word::parse(&letters) {
            if !words.contains(&word) {
                words.push(word);
            }
        }
    }
    words
}

fn bench_build(c: &mut Criterion) {
    let guesses = synthetic_words(2000, 7);
    let solutions = synthetic_words(500, 11);
    c.bench_function("build 2000x500 table", |b| {
        b.iter(|| PatternTable::build(black_box(guesses.clone()), black_box(solutions.clone())))
    });
}

fn bench_opening_guess(c: &mut Criterion) {
    let mut guesses = synthetic_words(2000, 7);
    let solutions = synthetic_words(500, 11);
    let extra: Vec<Word> = solutions.iter().copied().filter(|w| !guesses.contains(w)).collect();
    guesses.extend(extra);
    let model = GameModel::from_words(guesses, solutions).expect("non-empty word lists");

    c.bench_function("opening guess", |b| {
        b.iter(|| GameSession::new(black_box(&model), false).next_move())
    });
}

criterion_group!(benches, bench_build, bench_opening_guess);
criterion_main!(benches);
