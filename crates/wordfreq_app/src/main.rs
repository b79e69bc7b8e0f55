mod cli;
mod report;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_debug, engine_error};
use wordfreq_engine::{count_path, CountError, Strategy};

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    engine_logging::initialize(args.log_destination(), engine_logging::level_for(args.debug));

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    match run(&args, &mut out).and_then(|()| out.flush().context("failed to write output")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&args, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, out: &mut dyn Write) -> anyhow::Result<()> {
    let strategy = Strategy::from(args.strategy);
    engine_debug!("Using {} strategy with {:?}", strategy, args.settings());
    let counter = strategy
        .build(&args.settings())
        .context("failed to set up word counter")?;

    let entries = count_path(counter.as_ref(), &args.file, &args.order())
        .with_context(|| format!("failed to count words in {}", args.file.display()))?;

    report::write_entries(out, &entries, args.top, args.format).context("failed to write output")
}

fn report_failure(args: &Args, err: &anyhow::Error) {
    engine_error!("{:#}", err);
    if args.debug {
        eprintln!("{err:?}");
    } else if matches!(err.downcast_ref::<CountError>(), Some(CountError::Io(_))) {
        eprintln!("Error reading file: {}", args.file.display());
    } else {
        eprintln!("Encountered an error and had to exit");
    }
}
