//! Console Pontoon for one to seven players.

use std::env;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{Console, Game, PontoonOptions};

/// Console reading answers from standard input.
///
/// End of input answers "no" to every question so the game winds down
/// instead of spinning on an empty stream.
struct Terminal {
    input: io::StdinLock<'static>,
    closed: bool,
}

impl Terminal {
    fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            closed: false,
        }
    }

    fn read(&mut self, question: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        print!("{question}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Console for Terminal {
    fn ask_yes_no(&mut self, question: &str) -> bool {
        loop {
            let Some(answer) = self.read(question) else {
                return false;
            };
            match answer.to_lowercase().as_str() {
                "y" => return true,
                "n" => return false,
                _ => {}
            }
        }
    }

    fn ask_number(&mut self, question: &str, low: u8, high: u8) -> u8 {
        loop {
            let Some(answer) = self.read(question) else {
                return low;
            };
            if let Ok(number) = answer.parse::<u8>() {
                if (low..=high).contains(&number) {
                    return number;
                }
            }
        }
    }

    fn ask_line(&mut self, question: &str) -> String {
        self.read(question).unwrap_or_default()
    }

    fn show(&mut self, line: &str) {
        println!("{line}");
    }
}

fn seed() -> u64 {
    env::var("PONTOON_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("\t\tWelcome to Pontoon!\n");

    let options = PontoonOptions::default();
    let mut console = Terminal::new();

    let count = console.ask_number(
        &format!("How many players? (1 - {}): ", options.max_players),
        1,
        options.max_players,
    );
    let names: Vec<String> = (0..count)
        .map(|_| console.ask_line("Enter player name: "))
        .collect();
    println!();

    let mut game = match Game::new(names, options, seed()) {
        Ok(game) => game,
        Err(err) => {
            log::error!("cannot seat the table: {err}");
            return;
        }
    };

    loop {
        if let Err(err) = game.play_round(&mut console) {
            log::error!("round aborted: {err}");
            break;
        }
        if !console.ask_yes_no("\nDo you want to play again?: ") {
            break;
        }
    }

    console.ask_line("\n\nPress the enter key to exit.");
}
