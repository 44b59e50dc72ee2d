use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use gradeforge::console;
use gradeforge::{CurriculumConfig, CurriculumSolver};

use crate::error::CliError;
use crate::transcript::Transcript;

#[derive(Parser, Debug)]
#[command(
    name = "gradeforge",
    about = "Allocate a transcript to curriculum requirements for the best final grade",
    version
)]
pub(crate) struct Cli {
    /// Transcript file (.toml, .yaml or .yml)
    transcript: PathBuf,
    /// Curriculum configuration (TOML or YAML); defaults apply when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Print the plan as JSON instead of the text report
    #[arg(long)]
    json: bool,
    /// Log allocator decisions (repeat for selector internals)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => console::DEFAULT_FILTER,
            1 => "gradeforge_solver=debug",
            _ => "gradeforge_solver=trace",
        }
    }

    fn curriculum(&self) -> Result<CurriculumConfig, CliError> {
        match &self.config {
            Some(path) => Ok(CurriculumConfig::from_file(path)?),
            None => Ok(CurriculumConfig::default()),
        }
    }
}

pub(crate) fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    if !cli.json {
        console::init_with_filter(cli.log_filter());
    }

    let config = cli.curriculum()?;
    let transcript = Transcript::load(&cli.transcript)?;

    let plan = CurriculumSolver::new(config).solve(&transcript.achievements);
    let report = plan.report();

    let mut stdout = io::stdout().lock();
    let output = if cli.json {
        serde_json::to_string_pretty(&report)?
    } else {
        console::render_report(&report)
    };
    writeln!(stdout, "{}", output).map_err(|source| CliError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })?;

    Ok(())
}
