use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use sciexpr::{
    AngleMode, EvalContext, ParserConfig, evaluate_str_with,
    interpreter::parser::core::DEFAULT_MAX_DEPTH,
    util::format::{DEFAULT_PRECISION, format_result},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// sciexpr evaluates scientific calculator expressions such as
/// `2+3*sin(90)`, with real operator precedence and typed errors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read one expression per line from this file instead.
    /// Blank lines and lines starting with `#` are skipped.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// How arguments of sin, cos and tan are interpreted.
    #[arg(long, env = "SCIEXPR_ANGLE_MODE", default_value_t = AngleMode::Radians)]
    angle_mode: AngleMode,

    /// Maximum nesting depth accepted by the parser.
    #[arg(long, env = "SCIEXPR_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum number of decimals printed.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// The expression to evaluate. It may start with `-`.
    // Only `-f` has a short form: `a` and `p` occur in `tan` and `pi`, and a
    // leading-minus expression containing a known short flag is read as flags.
    #[arg(required_unless_present = "file", allow_hyphen_values = true)]
    expression: Option<String>,
}

impl Args {
    /// The expressions to evaluate, in order.
    fn expressions(&self) -> Result<Vec<String>, String> {
        match (&self.file, &self.expression) {
            (Some(path), _) => {
                let script = fs::read_to_string(path).map_err(|e| {
                                 format!("Failed to read the input file '{}': {e}",
                                         path.display())
                             })?;
                Ok(script.lines()
                         .map(str::trim)
                         .filter(|line| !line.is_empty() && !line.starts_with('#'))
                         .map(str::to_owned)
                         .collect())
            },
            (None, Some(expression)) => Ok(vec![expression.clone()]),
            (None, None) => Ok(Vec::new()),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let context = EvalContext::new(args.angle_mode);
    let config = ParserConfig { max_depth: args.max_depth };
    debug!(?args, "starting");

    let expressions = match args.expressions() {
        Ok(expressions) => expressions,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for expression in &expressions {
        match evaluate_str_with(expression, &context, config) {
            Ok(value) => println!("{}", format_result(value, args.precision)),
            Err(e) => {
                debug!(%expression, error = %e, "expression failed");
                eprintln!("{expression}: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
