use clap::Parser;
use engine::{
    GameSettings, GameStatus, Match3GameState, MoveOutcome, SessionRng, Symbol, log, logger,
};

#[derive(Parser)]
#[command(name = "match3_simulator")]
struct Args {
    /// Session seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of moves to auto-play.
    #[arg(long, default_value_t = 20)]
    moves: u32,

    /// Optional YAML settings file; defaults apply when omitted.
    #[arg(long)]
    settings: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Simulator".to_string());
    logger::init_logger(prefix);

    let settings = match &args.settings {
        Some(path) => GameSettings::load_from_file(path)?,
        None => GameSettings::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting session with seed {}", rng.seed());

    let mut game = Match3GameState::new(settings, &mut rng);
    log_board(&game);

    for move_number in 1..=args.moves {
        if game.status() != GameStatus::InProgress {
            break;
        }
        let actions = game.legal_actions();
        let action = actions[rng.random_range(0..actions.len())];
        match game.apply_move(action, &mut rng) {
            MoveOutcome::Applied { steps, score_delta } => {
                log!(
                    "Move {}: swap {:?} at ({}, {}) resolved {} step(s) for {} points (total {})",
                    move_number,
                    action.direction,
                    action.origin.x,
                    action.origin.y,
                    steps.len(),
                    score_delta,
                    game.score()
                );
            }
            MoveOutcome::Rejected => {
                log!("Move {}: action was rejected, skipping", move_number);
            }
        }
    }

    log!(
        "Session over: status {:?}, score {}, moves played {}",
        game.status(),
        game.score(),
        game.moves_made()
    );
    log_board(&game);

    Ok(())
}

fn log_board(game: &Match3GameState) {
    for row in game.board().rows() {
        let line: String = row.iter().map(|&symbol| symbol_glyph(symbol)).collect();
        log!("  {}", line);
    }
}

fn symbol_glyph(symbol: Symbol) -> char {
    match symbol {
        Symbol::Empty => '.',
        Symbol::Amber => 'A',
        Symbol::Emerald => 'E',
        Symbol::Ruby => 'R',
        Symbol::Sapphire => 'S',
        Symbol::Topaz => 'T',
    }
}
