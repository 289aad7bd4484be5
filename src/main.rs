use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::PathBuf;
use trivia::{app::App, config::TriviaConfig, error, models::QuestionBank, Result};

#[derive(Parser)]
#[command(name = "trivia", about = "Terminal trivia game")]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Custom question bank (.json or .toml)
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Number of questions per game
    #[arg(short = 'n', long)]
    questions_per_game: Option<usize>,

    /// Fixed shuffle seed
    #[arg(long)]
    seed: Option<u64>,

    /// Require every question to be answered correctly to win (true/false)
    #[arg(long)]
    all_correct: Option<bool>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the user config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Args {
    /// Override config file values with command line flags
    fn apply(&self, config: &mut TriviaConfig) {
        if let Some(path) = &self.questions {
            config.game.question_file = Some(path.clone());
        }
        if let Some(n) = self.questions_per_game {
            config.game.questions_per_game = n;
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(all_correct) = self.all_correct {
            config.game.require_all_correct = all_correct;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
    }
}

/// Log to a file; the terminal belongs to the TUI
fn init_logging(config: &TriviaConfig) -> Result<()> {
    let level = config.log.level_filter()?;
    let log_file = config.log.open_file()?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // Only fails if a logger is already installed
    let _ = WriteLogger::init(level, log_config, log_file);
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => TriviaConfig::load_from(path)?,
        None => TriviaConfig::load()?,
    };
    args.apply(&mut config);
    config.validate()?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if args.save_config {
        config.save()?;
        println!("Saved {}", TriviaConfig::config_file_path()?.display());
        return Ok(());
    }

    init_logging(&config)?;
    log::info!("Trivia starting up");

    let bank = match &config.game.question_file {
        Some(path) => QuestionBank::load(path)?,
        None => QuestionBank::builtin(),
    };

    let mut app = App::new(&config, &bank)?;
    app.init()?;
    let result = app.run();
    app.restore()?;

    log::info!("Trivia shutting down");
    result
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}
