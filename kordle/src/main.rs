//! Interactive terminal front end for kordle.
//!
//! Each input line is one guess attempt: Latin letters go through the
//! Dubeolsik keymap, raw jamo pass straight in, and the line is submitted
//! as a whole. `:new` starts a fresh round, `:quit` exits.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::style::{StyledContent, Stylize};
use rand::rngs::StdRng;
use rand::SeedableRng;

use kordle::{
    qwerty_to_jamo, words, Game, Grade, Status, KEYBOARD_ROWS, MAX_GUESSES,
};

#[derive(Parser)]
#[command(name = "kordle", about = "Guess the two-syllable Hangul word")]
struct Args {
    /// Seed for reproducible word selection
    #[arg(long)]
    seed: Option<u64>,
    /// Fix the answer to a specific word-list entry (e.g. --answer 사람)
    #[arg(long)]
    answer: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = match &args.answer {
        Some(word) => match words::find(word) {
            Some(entry) => Game::with_entry(entry),
            None => bail!("'{word}' is not in the word list"),
        },
        None => Game::new(&mut rng),
    };

    println!("kordle - guess the two-syllable word in {MAX_GUESSES} tries");
    println!("type with Latin letters (Dubeolsik layout) or raw jamo; :new restarts, :quit exits");
    render(&game);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => {
                prompt()?;
                continue;
            }
            ":quit" | ":q" => break,
            ":new" => {
                game.new_game(&mut rng);
                render(&game);
                prompt()?;
                continue;
            }
            _ => {}
        }

        let mut line_ok = true;
        for key in line.chars() {
            let jamo = qwerty_to_jamo(key).unwrap_or(key);
            if let Err(rejection) = game.push_jamo(jamo) {
                println!("{}", format!("  {rejection}").dark_red());
                line_ok = false;
                break;
            }
        }
        // Never submit a truncated line; that would burn a guess.
        if !line_ok {
            game.clear_input();
            prompt()?;
            continue;
        }
        match game.submit_guess() {
            Ok(status) => {
                render(&game);
                match status {
                    Status::Won => {
                        println!(
                            "{} the word was {} ({})",
                            "correct!".green().bold(),
                            game.target_word(),
                            game.target_meaning()
                        );
                        println!("type :new for another round or :quit to exit");
                    }
                    Status::Lost => {
                        println!(
                            "{} the word was {} ({})",
                            "out of guesses.".dark_red().bold(),
                            game.target_word(),
                            game.target_meaning()
                        );
                        println!("type :new for another round or :quit to exit");
                    }
                    Status::Playing => {}
                }
            }
            Err(rejection) => {
                println!("{}", format!("  {rejection}").dark_red());
                game.clear_input();
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn styled(c: char, grade: Grade) -> StyledContent<char> {
    match grade {
        Grade::Correct => c.green(),
        Grade::Present => c.yellow(),
        Grade::MisplacedSyllable => c.blue(),
        Grade::Absent => c.dark_grey(),
        Grade::None => c.white(),
    }
}

fn render(game: &Game) {
    println!();
    for record in game.guesses() {
        for block in &record.blocks {
            print!("{} ", styled(block.block, block.grade));
        }
        print!("  ");
        for block in &record.blocks {
            print!("[");
            for component in &block.components {
                for atom in &component.atoms {
                    print!("{}", styled(atom.jamo, atom.grade));
                }
            }
            print!("] ");
        }
        println!();
    }
    for _ in game.guesses().len()..MAX_GUESSES {
        println!("_ _");
    }

    let preview: String = game.preview().into_iter().collect();
    if !preview.is_empty() {
        println!("input: {preview}");
    }

    println!();
    for row in KEYBOARD_ROWS {
        print!("  ");
        for &jamo in row {
            print!("{} ", styled(jamo, game.hints().get(jamo)));
        }
        println!();
    }
    println!();
}
