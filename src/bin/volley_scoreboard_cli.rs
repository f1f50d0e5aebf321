// src/bin/volley_scoreboard_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use volley_scoreboard::api::{build_scoreboard_view, parse_command, HostCommand};
use volley_scoreboard::domain::MatchState;
use volley_scoreboard::engine::{MatchAction, Scoreboard};
use volley_scoreboard::infra::{JsonFileMatchStorage, MatchStorage, SystemClock, STORAGE_KEY};
use volley_scoreboard::report::export_match_report;

const HELP: &str = "\
Scorciatoie: Q/A Casa +/- | P/L Ospite +/- | W/O Timeout | 1/2 Servizio | U Annulla
Comandi:
  award home|away            assegna il set
  serve home|away            cambia servizio
  reset-set                  azzera il set corrente
  rename home|away <nome>    rinomina squadra
  rules chiave=valore ...    best_of, points_set, points_tiebreak, timeouts, win_by_two, auto_set_win
  new                        nuova partita
  export <file.csv>          esporta il report
  show | help | quit";

/// Табло волейбольного матча в терминале.
#[derive(Debug, Parser)]
#[command(name = "volley_scoreboard_cli", version)]
struct Args {
    /// Файл, в котором хранится текущий матч.
    #[arg(long, default_value_t = default_state_file())]
    state_file: String,

    /// Уровень логов (trace, debug, info, warn, error). RUST_LOG имеет приоритет.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn default_state_file() -> String {
    format!("{STORAGE_KEY}.json")
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_view(board: &Scoreboard<SystemClock>) {
    print!("{}", build_scoreboard_view(board.match_state(), board.can_undo()));
}

fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut storage = JsonFileMatchStorage::new(PathBuf::from(&args.state_file));
    let initial = storage.load().unwrap_or_default();
    let mut board = Scoreboard::new(initial, SystemClock);

    println!("=== SEGNAPUNTI PALLAVOLO ===\n");
    println!("{HELP}\n");
    print_view(&board);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("Errore di lettura: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line, board.match_state()) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            HostCommand::Actions(actions) => {
                let mut changed = false;
                for action in &actions {
                    changed |= board.dispatch(action);
                }
                if changed {
                    storage.save(board.match_state());
                    print_view(&board);
                }
            }
            HostCommand::NewMatch => {
                storage.clear();
                if board.dispatch(&MatchAction::MatchReset) {
                    storage.save(board.match_state());
                }
                print_view(&board);
            }
            HostCommand::Export(path) => export(board.match_state(), path),
            HostCommand::Show => print_view(&board),
            HostCommand::Help => println!("{HELP}"),
            HostCommand::Quit => break,
        }

        let _ = io::stdout().flush();
    }
}

fn export(state: &MatchState, path: PathBuf) {
    match export_match_report(state, &path) {
        Ok(()) => println!("Report salvato in {}", path.display()),
        Err(err) => println!("Esportazione non riuscita: {err}"),
    }
}
