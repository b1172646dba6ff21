use std::path::PathBuf;

use clap::Parser;

use sign_analysis::{analyze, analyze_procedure};

const SAMPLE: &str = "
a = 5
b = -2
c = a + b
d = a - b
e = a * b
f = d + e
g = f - b
h = g * 2
j = (a - b) * (b + 3)
k = (a + e) / b
";

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Procedure file (`name = expression` per line). Uses a built-in sample if omitted.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Extra expression to analyze against the final environment (repeatable).
    #[clap(long, value_name = "EXPR")]
    expr: Vec<String>,

    /// Log every analysis step.
    #[clap(long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let text = match &args.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    println!("Procedure:");
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        println!("    {}", line.trim());
    }

    let env = analyze_procedure(&text)?;

    println!("Signs of variables:");
    print!("{}", env);

    for expr in &args.expr {
        println!("{} => {}", expr, analyze(expr, &env));
    }

    log::info!("Done in {:.3}s", time_total.elapsed().as_secs_f64());
    Ok(())
}
