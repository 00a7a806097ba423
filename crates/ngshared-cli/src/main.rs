//! ngshared command-line interface.

mod output;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use indexmap::IndexMap;
use ngshared::{Analysis, Netlist, Session, SessionConfig, SimOption, Simulation, VectorData};

#[derive(Parser)]
#[command(name = "ngshared")]
#[command(about = "Run an ngspice analysis on a netlist and print the result vectors", long_about = None)]
#[command(version)]
struct Cli {
    /// Input netlist file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Path to the ngspice shared library (overrides NGSPICE_LIBRARY_PATH)
    #[arg(long, value_name = "PATH")]
    library: Option<PathBuf>,

    /// Analysis to run
    #[arg(short, long, value_enum, default_value_t = AnalysisKind::Op)]
    analysis: AnalysisKind,

    /// Analysis arguments, e.g. "v1 0 1 0.1" for dc
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    args: String,

    /// Vector to print (repeatable); all vectors of the plot by default
    #[arg(long = "vector", value_name = "NAME")]
    vectors: Vec<String>,

    /// Plot to read vectors from; the current plot by default
    #[arg(long)]
    plot: Option<String>,

    /// Simulator option as NAME or NAME=VALUE (repeatable)
    #[arg(long = "option", value_name = "NAME[=VALUE]")]
    options: Vec<String>,

    /// Print vectors as JSON
    #[arg(long)]
    json: bool,

    /// Only validate the netlist
    #[arg(long)]
    check: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AnalysisKind {
    Op,
    Dc,
    Ac,
    Tran,
}

impl AnalysisKind {
    fn keyword(self) -> &'static str {
        match self {
            AnalysisKind::Op => "op",
            AnalysisKind::Dc => "dc",
            AnalysisKind::Ac => "ac",
            AnalysisKind::Tran => "tran",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let netlist = Netlist::new(cli.input.as_path())
        .with_context(|| format!("Invalid netlist: {}", cli.input.display()))?;

    if cli.check {
        println!("{}: ok ({} lines)", netlist.title(), netlist.len());
        return Ok(());
    }

    let analysis = Analysis::from_parts(cli.analysis.keyword(), &cli.args)
        .with_context(|| format!("Invalid {} arguments: '{}'", cli.analysis.keyword(), cli.args))?;
    let options = cli
        .options
        .iter()
        .map(|option| parse_option(option))
        .collect::<Result<Vec<_>>>()?;

    let mut config = SessionConfig::from_env();
    if let Some(ref library) = cli.library {
        config = config.with_library_path(library);
    }
    let session = Session::open(&config).context("Failed to start ngspice")?;

    if cli.verbose {
        println!("Circuit: {}", netlist.title());
        println!("Analysis: {}", analysis.command_line());
        println!();
    }

    if !options.is_empty() {
        session.set_options(options).context("Failed to set options")?;
    }

    let mut sim = Simulation::new(netlist);
    sim.setup(analysis);
    let lines = sim.run(&session).context("Simulation failed")?;
    for line in &lines {
        log::info!("{}", line);
    }

    let plot = match cli.plot {
        Some(plot) => plot,
        None => sim.current_plot(&session)?,
    };
    let vectors = collect_vectors(&sim, &session, &plot, &cli.vectors)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&vectors)?);
    } else {
        output::print_table(&plot, &vectors);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Parse `NAME` or `NAME=VALUE`.
fn parse_option(text: &str) -> Result<SimOption> {
    let text = text.trim();
    match text.split_once('=') {
        Some((name, _)) if name.trim().is_empty() => bail!("Option without a name: '{}'", text),
        Some((name, value)) => Ok(SimOption::value(name.trim(), value.trim())),
        None if text.is_empty() => bail!("Empty option"),
        None => Ok(SimOption::flag(text)),
    }
}

fn collect_vectors(
    sim: &Simulation,
    session: &Session,
    plot: &str,
    names: &[String],
) -> Result<IndexMap<String, VectorData>> {
    if names.is_empty() {
        return sim
            .vectors(session, Some(plot))
            .with_context(|| format!("Failed to read plot '{}'", plot));
    }

    let mut vectors = IndexMap::with_capacity(names.len());
    for name in names {
        let data = sim
            .vector(session, name, Some(plot))
            .with_context(|| format!("Failed to read vector '{}'", name))?;
        vectors.insert(name.clone(), data);
    }
    Ok(vectors)
}
