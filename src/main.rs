//! Wordle Entropy CLI
//!
//! Builds the pattern table once, then plays games interactively or against
//! a known secret word.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use wordle_entropy::{
    benchmark, word::load_word_list, Config, Error, FeedbackPattern, GameModel, GameSession,
    HardModeConstraints, Move, Outcome, PatternTable, ScoredGuess, Word, WORD_LENGTH,
};

#[derive(Parser)]
#[command(name = "wordle-entropy", about, version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Options for `play` when no subcommand is given, ignored otherwise
    #[command(flatten)]
    play: PlayArgs,

    /// Directory holding guesses.txt and solutions.txt
    #[arg(long, global = true, env = "WORDLE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Directory holding the precomputed pattern table
    #[arg(long, global = true, env = "WORDLE_CACHE_DIR", default_value = "cache")]
    cache_dir: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Build the pattern table from the word lists and save it
    Precompute,

    /// Play one game (default)
    Play(PlayArgs),

    /// Show the best opening guesses
    Suggest {
        /// Number of guesses to show
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,
    },

    /// Play against every solution and report the guess distribution
    Bench {
        /// Only play guesses consistent with earlier clues
        #[arg(long)]
        hard: bool,

        /// Give up after this many guesses
        #[arg(long, default_value_t = 10)]
        max_turns: usize,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Only play guesses consistent with earlier clues
    #[arg(long)]
    hard: bool,

    /// Play automatically against this word instead of asking for feedback
    #[arg(long, value_name = "WORD")]
    secret: Option<Word>,

    /// Give up after this many guesses
    #[arg(long, default_value_t = 10)]
    max_turns: usize,

    /// In interactive play, also list this many alternative guesses each turn
    #[arg(short = 'n', long, default_value_t = 0)]
    top: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::new(cli.data_dir, cli.cache_dir);

    match cli.command.unwrap_or(Command::Play(cli.play)) {
        Command::Precompute => precompute(&config),
        Command::Play(args) => play(&open_model(&config)?, &args),
        Command::Suggest { top } => suggest(&open_model(&config)?, top),
        Command::Bench { hard, max_turns } => bench(&open_model(&config)?, hard, max_turns),
    }
}

fn open_model(config: &Config) -> Result<GameModel> {
    let model = GameModel::open(config).with_context(|| {
        format!(
            "could not load game data (run `wordle-entropy precompute` after placing word lists in {})",
            config.data_dir.display()
        )
    })?;
    println!(
        "Table loaded  (guesses {}  |  solutions {})",
        model.guesses().len(),
        model.solutions().len()
    );
    Ok(model)
}

fn precompute(config: &Config) -> Result<()> {
    let guesses = load_word_list(&config.guesses_path(), "guess")?;
    let solutions = load_word_list(&config.solutions_path(), "solution")?;

    let start = Instant::now();
    let table = PatternTable::build(guesses, solutions)?;
    table
        .save(&config.cache_dir)
        .context("could not save the pattern table")?;
    println!(
        "Built {}x{} table in {:.2?}, saved to {}",
        table.rows(),
        table.cols(),
        start.elapsed(),
        config.cache_dir.display()
    );
    Ok(())
}

fn print_alternatives(session: &GameSession<'_>, top: usize) -> Result<()> {
    if top == 0 {
        return Ok(());
    }
    println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Entropy", "Exp. Remain");
    println!("{}", "-".repeat(50));
    for (i, analysis) in session.top_guesses(top)?.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            analysis.word,
            analysis.entropy,
            analysis.expected_remaining,
            if analysis.is_possible_answer { "✓" } else { "" }
        );
    }
    Ok(())
}

fn play(model: &GameModel, args: &PlayArgs) -> Result<()> {
    let mut session = GameSession::new(model, args.hard);
    if session.is_hard_mode() {
        println!("Hard mode: ON");
    }

    let record = match args.secret {
        Some(secret) => {
            let solution = model
                .solution_index(&secret)
                .ok_or(Error::InvalidSecret(secret))?;
            let mut turn = 0;
            session.solve_with_feedback(args.max_turns, |guess| {
                turn += 1;
                announce(turn, guess);
                let feedback = model.table().get(guess.index, solution);
                println!("{}  {}", guess.word, feedback);
                Ok(feedback)
            })?
        }
        None => {
            interactive(&mut session, args)?;
            return Ok(());
        }
    };

    match record.outcome {
        Outcome::Solved(answer) => {
            println!();
            println!("Solved! The word is {answer}.");
            Ok(())
        }
        Outcome::Exhausted => bail!("not solved within {} guesses", args.max_turns),
    }
}

fn announce(turn: usize, guess: &ScoredGuess) {
    println!();
    println!(
        "Turn {turn} - suggested guess: {}  ({:.3} bits, {:.1} expected remaining)",
        guess.word, guess.entropy, guess.expected_remaining
    );
}

/// Greens and ruled-out letters, e.g. `Known: C____  Ruled out: AER`.
fn describe_constraints(constraints: &HardModeConstraints) -> String {
    let known: String = (0..WORD_LENGTH)
        .map(|pos| constraints.green(pos).map_or('_', char::from))
        .collect();
    let ruled_out: String = (b'A'..=b'Z')
        .filter(|&letter| constraints.is_excluded(letter))
        .map(char::from)
        .collect();
    format!("Known: {known}  Ruled out: {ruled_out}")
}

/// One line of player input.
#[derive(Debug)]
enum Input {
    Feedback(Option<Word>, FeedbackPattern),
    Undo,
    Quit,
}

fn parse_input(line: &str) -> Result<Input, Error> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "undo" | "u" => return Ok(Input::Undo),
        "quit" | "exit" | "q" => return Ok(Input::Quit),
        _ => {}
    }
    // "CRANE GYBBB" plays a different word than the suggestion
    if let Some((word, feedback)) = line.split_once(char::is_whitespace) {
        if let Ok(word) = Word::parse(word) {
            return Ok(Input::Feedback(Some(word), FeedbackPattern::parse(feedback)?));
        }
    }
    Ok(Input::Feedback(None, FeedbackPattern::parse(line)?))
}

fn interactive(session: &mut GameSession<'_>, args: &PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        let guess = match session.next_move()? {
            Move::Solved(answer) => {
                println!();
                println!("Solved! The word is {answer}.");
                return Ok(());
            }
            Move::Guess(guess) => guess,
        };
        announce(session.turns().len() + 1, &guess);
        print_alternatives(session, args.top)?;

        loop {
            print!("Enter feedback (e.g. GYBBG or 21010), WORD FEEDBACK, undo or quit: ");
            stdout.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                bail!("input closed before the game was solved");
            }

            let (word, feedback) = match parse_input(&line) {
                Ok(Input::Quit) => return Ok(()),
                Ok(Input::Undo) => match session.undo() {
                    Ok(turn) => {
                        println!("Took back {} {}", turn.guess, turn.feedback);
                        break;
                    }
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                },
                Ok(Input::Feedback(word, feedback)) => (word.unwrap_or(guess.word), feedback),
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            if !session.is_legal(&word) {
                println!("{word} breaks the hard-mode constraints");
                continue;
            }
            match session.apply_feedback(word, feedback) {
                Ok(remaining) => {
                    println!("{word}  {feedback}  ({remaining} candidates left)");
                    if session.is_hard_mode() {
                        println!("{}", describe_constraints(session.constraints()));
                    }
                    if remaining <= 10 {
                        let words: Vec<String> =
                            session.possible_answers().iter().map(Word::to_string).collect();
                        println!("Remaining: {}", words.join(" "));
                    }
                    break;
                }
                Err(e @ Error::UnknownGuess(_)) => println!("{e}"),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn suggest(model: &GameModel, top: usize) -> Result<()> {
    let session = GameSession::new(model, false);
    match session.next_move()? {
        Move::Solved(answer) => println!("Only one solution: {answer}"),
        Move::Guess(best) => {
            println!("Best opening guess: {}", best.word);
            println!("Entropy: {:.3} bits", best.entropy);
            print_alternatives(&session, top)?;
        }
    }
    Ok(())
}

fn bench(model: &GameModel, hard: bool, max_turns: usize) -> Result<()> {
    let start = Instant::now();
    let report = benchmark::run(model, hard, max_turns)?;
    let elapsed = start.elapsed();

    let total = report.games();
    println!("Guess distribution:");
    for (guesses, count) in &report.distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", report.average());
    println!("Total words: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);

    let failures = report.over(6) + report.unsolved;
    if failures > 0 {
        println!("Words not solved in 6 guesses: {}", failures);
    } else {
        println!("✓ All words solved within 6 guesses!");
    }
    Ok(())
}
