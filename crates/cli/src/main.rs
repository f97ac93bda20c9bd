// raggrid CLI - staged ragged grid demo (construct, fill, invert)

mod exit_codes;
mod output;

use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use raggrid_engine::{GridError, Transformer};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use output::Stage;

#[derive(Parser)]
#[command(name = "raggrid")]
#[command(about = "Ragged grid demo: random fill and sign inversion at minimal difference")]
#[command(version)]
struct Cli {
    /// Comma-separated row lengths
    #[arg(long, default_value = "5,6,7,8,9")]
    sizes: String,

    /// Lower fill bound (inclusive)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    min: i64,

    /// Upper fill bound (inclusive)
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    max: i64,

    /// Seed the random generator for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Emit all stages as a single JSON object on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    /// Create error from an engine error with the proper exit code.
    pub fn grid(err: GridError) -> Self {
        let (code, hint) = match &err {
            GridError::InvalidDimension { .. } => {
                (EXIT_USAGE, Some("row lengths in --sizes must be >= 0".to_string()))
            }
            GridError::InvalidRange { .. } => {
                (EXIT_USAGE, Some("--max must not be below --min".to_string()))
            }
            _ => (EXIT_ERROR, None),
        };
        Self { code, message: err.to_string(), hint }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Parse `--sizes` into row lengths. Range validation (>= 0) belongs
/// to the engine; this only handles the comma-separated syntax.
fn parse_sizes(s: &str) -> Result<Vec<i64>, CliError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CliError::args("no row sizes given")
            .with_hint("pass --sizes as a comma-separated list, e.g. --sizes 5,6,7"));
    }
    trimmed
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CliError::args(format!("invalid row size {:?} in --sizes", part.trim())))
        })
        .collect()
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let sizes = parse_sizes(&cli.sizes)?;

    let mut handler = Transformer::from_row_sizes(&sizes).map_err(CliError::grid)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let original = handler.clone();
    handler.fill(cli.min, cli.max, &mut rng).map_err(CliError::grid)?;
    let filled = handler.clone();
    handler.invert_sign_at_minimal_difference();

    if cli.json {
        print_json(cli, &sizes, &original, &filled, &handler)
    } else {
        print_text(cli, &original, &filled, &handler)
    }
}

fn print_text(
    cli: &Cli,
    original: &Transformer,
    filled: &Transformer,
    inverted: &Transformer,
) -> Result<(), CliError> {
    println!("{}", output::constants_line(cli.min, cli.max));
    for (stage, handler) in [
        (Stage::Original, original),
        (Stage::Filled, filled),
        (Stage::Inverted, inverted),
    ] {
        println!();
        println!("{}", stage.heading());
        print!("{}", handler.render().map_err(CliError::grid)?);
    }
    Ok(())
}

fn print_json(
    cli: &Cli,
    sizes: &[i64],
    original: &Transformer,
    filled: &Transformer,
    inverted: &Transformer,
) -> Result<(), CliError> {
    let mut stages = serde_json::Map::new();
    for (stage, handler) in [
        (Stage::Original, original),
        (Stage::Filled, filled),
        (Stage::Inverted, inverted),
    ] {
        stages.insert(
            stage.key().to_string(),
            serde_json::json!({
                "rows": handler.grid().rows(),
                "sum_first_last": handler.sum_first_last().map_err(CliError::grid)?,
            }),
        );
    }
    let doc = serde_json::json!({
        "sizes": sizes,
        "bounds": { "min": cli.min, "max": cli.max },
        "seed": cli.seed,
        "stages": stages,
    });
    let rendered = serde_json::to_string_pretty(&doc)
        .map_err(|e| CliError { code: EXIT_ERROR, message: e.to_string(), hint: None })?;
    println!("{}", rendered);
    Ok(())
}
