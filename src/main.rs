use anyhow::Result;
use clap::{ArgAction, Parser};
use mkpw::ui::{self, DisplayOptions};
use mkpw::{AdjacencyTable, GenerationConfig, Keystream, generate};
use std::process::ExitCode;
use tracing::{Level, debug};

#[derive(Parser)]
#[command(
    name = "mkpw",
    author,
    about = "Make password",
    long_about = "Make a random password in which no two consecutive characters sit next to each other on a QWERTY keyboard",
    disable_version_flag = true
)]
struct Cli {
    /// Print version information and exit
    #[arg(long)]
    version: bool,

    /// Use digit characters
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    digit: bool,

    /// Use alphabet characters
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    alpha: bool,

    /// Use punctuation characters
    #[arg(long, default_value_t = false, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    punct: bool,

    /// Switch to strict mode (digits, letters and punctuation all enabled)
    #[arg(long, default_value_t = false, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    strict: bool,

    /// The total length
    #[arg(long, default_value_t = 8)]
    length: usize,

    /// The digit char number
    #[arg(long = "digitNum", visible_alias = "digit-num", default_value_t = 2)]
    digit_num: usize,

    /// The punctuation char number
    #[arg(long = "punctNum", visible_alias = "punct-num", default_value_t = 1)]
    punct_num: usize,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.length,
            use_digit: self.digit,
            use_alpha: self.alpha,
            use_punct: self.punct,
            strict: self.strict,
            digit_num: self.digit_num,
            punct_num: self.punct_num,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    if cli.version {
        ui::display_version()?;
        return Ok(ExitCode::SUCCESS);
    }

    if cli.length == 0 {
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.generation_config();
    let table = AdjacencyTable::qwerty();
    let mut rng = match cli.seed {
        Some(seed) => {
            debug!(seed, "using fixed seed");
            Keystream::from_seed(seed)
        }
        None => Keystream::from_entropy(),
    };

    match generate(&config, &table, &mut rng) {
        Ok(password) => {
            ui::display_password(&password)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            ui::display_error(&err.to_string(), &DisplayOptions::detect())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
