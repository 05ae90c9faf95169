mod render;
mod submit;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use feedback::Report;
use tracing::Level;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", feedback::NO_FILE_MESSAGE)]
    NoFile,
    #[error("failed to read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },
    #[error("{}", feedback::error_message(.0))]
    Analysis(String),
    #[error("health check failed: HTTP {0}")]
    HealthCheck(u16),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "cvlens", about = "Submit a resume for analysis and print the feedback")]
struct Cli {
    #[arg(long, env = "CVLENS_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Upload a PDF and print the analysis.
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// PDF to analyze.
    file: Option<PathBuf>,

    #[arg(long, env = "CVLENS_ROLE", default_value = feedback::DEFAULT_TARGET_ROLE)]
    role: String,

    /// Print the decoded result as JSON instead of the report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    let outcome = match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Analyze(args) => run_analyze(&cli.base_url, args).await,
    };
    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = submit::endpoint(base_url, "/healthz");
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::HealthCheck(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_analyze(base_url: &str, args: AnalyzeArgs) -> Result<(), CliError> {
    let path = args.file.ok_or(CliError::NoFile)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| CliError::ReadFile { path: path.display().to_string(), source })?;

    let role = feedback::effective_role(&args.role).to_owned();
    eprintln!("Analyzing {} for role '{role}'...", path.display());
    let result = submit::submit(base_url, &role, bytes).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render_report(&Report::from_result(&result)));
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
