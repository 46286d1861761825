mod common;

use anyhow::{Context, Result};
use boothmap_core::FloorConfig;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use common::reports::{generate_console_report, generate_json_report, generate_markdown_report};
use common::scenario::{ScenarioCtx, expand_scenarios, get_scenario, list_scenarios};
use common::script::Script;
use common::{ScenarioResult, ScenarioRunner, parse_seeds, split_csv};

#[derive(Debug, Parser)]
#[command(name = "boothmap-tester", version = "0.1.0")]
#[command(about = "Seeded scenario, script and fuzz checks for the Boothmap booking engine")]
struct Args {
    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated, decimal or 0x hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Operations per randomized run
    #[arg(long, default_value_t = 500)]
    steps: usize,

    /// Floor config JSON to test against instead of the bundled floor
    #[arg(long)]
    floor: Option<PathBuf>,

    /// Cart script to replay after the scenarios
    #[arg(long)]
    script: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let config = load_floor(args.floor.as_deref())?;
    let seeds = parse_seeds(&args.seeds)?;
    let mut base = ScenarioCtx::new(seeds.first().copied().unwrap_or(1337), args.steps, config);
    base.verbose = args.verbose;

    let mut results = run_scenarios(&args, &base, &seeds);
    if let Some(path) = &args.script {
        results.extend(run_script(&args, &base, path)?);
    }

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧪 Boothmap Tester".bright_cyan().bold());
    println!("{}", "==================".cyan());
}

fn load_floor(path: Option<&Path>) -> Result<FloorConfig> {
    let Some(path) = path else {
        return Ok(FloorConfig::load_from_static());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read floor config {}", path.display()))?;
    FloorConfig::from_json(&raw)
        .with_context(|| format!("invalid floor config {}", path.display()))
}

fn run_scenarios(args: &Args, base: &ScenarioCtx, seeds: &[u64]) -> Vec<ScenarioResult> {
    let runner = ScenarioRunner::new(args.verbose);
    let mut results = Vec::new();
    for name in expand_scenarios(&split_csv(&args.scenarios)) {
        let Some(scenario) = get_scenario(&name) else {
            println!("⚠️  Unknown scenario: {}", name.yellow());
            log::warn!("skipping unknown scenario {name}");
            continue;
        };
        results.extend(runner.run_scenario(scenario.as_ref(), base, seeds, args.iterations));
    }
    results
}

fn run_script(args: &Args, base: &ScenarioCtx, path: &Path) -> Result<Vec<ScenarioResult>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let name = path
        .file_stem()
        .map_or_else(|| "script".to_string(), |s| s.to_string_lossy().into_owned());
    let script = Script::parse(format!("script:{name}"), &source)
        .with_context(|| format!("invalid script {}", path.display()))?;
    let runner = ScenarioRunner::new(args.verbose);
    Ok(runner.run_scenario(&script, base, &[base.seed], 1))
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => generate_json_report(output_target.writer(), results)?,
        "markdown" => generate_markdown_report(output_target.writer(), results)?,
        _ => {
            let duration = start_time.elapsed();
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                generate_console_report(output_target.writer(), results, duration)?;
            }
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
