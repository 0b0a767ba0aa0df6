//! Terminal client for the remote execution service
//!
//! Submits a source file (or a starter snippet) to the configured
//! Piston-compatible API and prints the formatted output, the error indicator,
//! and execution statistics when the service reports them.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use runbox_client::{ExecutionBackend, PistonClient};
use runbox_core::{
    classify, default_snippet, infer_language, language_catalog, runtime_config,
    ExecutionRequest, OutputStatus, RunnerConfig,
};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Runbox - run code on a remote execution service")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a source file (or the starter snippet when no file is given)
    Run {
        /// Source file to submit
        file: Option<String>,

        #[clap(long, short, help = "Language identifier; inferred from the file extension when omitted")]
        language: Option<String>,

        #[clap(long, help = "Text passed to the program on stdin")]
        stdin: Option<String>,

        #[clap(long, help = "Base URL of the execution API (RUNBOX_API_URL also honored)")]
        api_url: Option<String>,
    },
    /// List the languages in the static catalog
    Languages,
    /// List the runtimes the remote service supports
    Runtimes {
        #[clap(long, help = "Base URL of the execution API (RUNBOX_API_URL also honored)")]
        api_url: Option<String>,
    },
    /// Print the starter snippet for a language
    Snippet { language: String },
}

fn runner_config(api_url: Option<String>) -> RunnerConfig {
    let config = RunnerConfig::from_env();
    match api_url {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

/// Resolve the language for a run: an explicit flag wins, otherwise the file
/// extension decides.
fn resolve_language(language: Option<String>, file: Option<&str>) -> Result<String> {
    if let Some(language) = language {
        return Ok(language);
    }

    let file = file.ok_or_else(|| anyhow!("--language is required when no file is given"))?;
    let extension = Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| anyhow!("Cannot infer language: '{}' has no extension", file))?;

    infer_language(extension)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Cannot infer language from extension '.{}'; pass --language", extension))
}

async fn run(
    file: Option<String>,
    language: Option<String>,
    stdin: Option<String>,
    api_url: Option<String>,
) -> Result<ExitCode> {
    let language = resolve_language(language, file.as_deref())?;

    let code = match &file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read '{}': {}", path, e))?,
        None => default_snippet(&language).to_string(),
    };

    let mut request = ExecutionRequest::new(language, code);
    request.input = stdin;

    let client = PistonClient::new(runner_config(api_url));
    log::debug!("Submitting to {}", client.config().base_url);
    let result = client.execute(&request).await;

    println!("{}", result.output);

    if let Some(time) = result.execution_time {
        eprintln!("Execution time: {} ms", time);
    }
    if let Some(memory) = result.memory {
        eprintln!("Memory: {} bytes", memory);
    }

    match classify(&result) {
        OutputStatus::Success => Ok(ExitCode::SUCCESS),
        OutputStatus::Error => {
            if let Some(error) = &result.error {
                if !result.output.contains(error.as_str()) {
                    eprintln!("{}", error);
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_languages() {
    for info in language_catalog() {
        let runtime = runtime_config(info.id);
        println!(
            "{:<12} {:<12} {:<10} {}",
            info.id, info.name, runtime.version, info.description
        );
    }
}

async fn print_runtimes(api_url: Option<String>) {
    let client = PistonClient::new(runner_config(api_url));
    let runtimes = client.runtimes().await;

    if runtimes.is_empty() {
        println!("No runtimes reported by the service.");
        return;
    }
    for runtime in runtimes {
        if runtime.aliases.is_empty() {
            println!("{:<16} {}", runtime.language, runtime.version);
        } else {
            println!(
                "{:<16} {:<10} (aliases: {})",
                runtime.language,
                runtime.version,
                runtime.aliases.join(", ")
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    match cli.command {
        Commands::Run {
            file,
            language,
            stdin,
            api_url,
        } => run(file, language, stdin, api_url).await,
        Commands::Languages => {
            print_languages();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Runtimes { api_url } => {
            print_runtimes(api_url).await;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Snippet { language } => {
            print!("{}", default_snippet(&language));
            Ok(ExitCode::SUCCESS)
        }
    }
}
