//! chronicler - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chronicler::{ChronicleError, Chronicler, Config, GitCli, LlmChoice, ProviderSelector};

/// Environment variable holding the tracing filter.
const LOG_ENV_VAR: &str = "CHRONICLER_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Generate release notes and commit descriptions from git using an LLM.
#[derive(Parser, Debug)]
#[command(name = "chronicler")]
#[command(about = "Generate release notes and commit descriptions from git using an LLM")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two branches and generate release notes
    Release {
        /// Left branch of the comparison
        left_branch: String,

        /// Right branch of the comparison
        right_branch: String,

        /// Path to the git repository
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        llm: LlmArgs,

        /// Print the prompt instead of calling the LLM
        #[arg(long)]
        dry_run: bool,
    },

    /// Describe the pending changes as a commit message
    Commit {
        /// Path to the git repository
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        llm: LlmArgs,

        /// Print the prompt instead of calling the LLM
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args, Debug)]
struct LlmArgs {
    /// LLM to use (ollama, openai)
    #[arg(long, default_value = "ollama")]
    llm: String,

    /// Model to use (e.g., llama2, mistral, gpt-4o-mini); defaults per provider
    #[arg(long = "llm-model")]
    llm_model: Option<String>,
}

impl LlmArgs {
    fn choice(&self) -> LlmChoice<'_> {
        LlmChoice {
            provider: &self.llm,
            model: self.llm_model.as_deref(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: {:#}. Logging disabled.", e);
    }

    let config = Config::from_env();

    println!("{}", render(run(cli.command, config).await));
}

/// Text printed for a command result. Failures are reported on stdout and
/// the process still terminates normally.
fn render(result: Result<String, ChronicleError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => format!("Error: {}", e),
    }
}

async fn run(command: Command, config: Config) -> Result<String, ChronicleError> {
    let git = GitCli::locate()?;
    let chronicler = Chronicler::new(git, ProviderSelector::new(config));

    match command {
        Command::Release {
            left_branch,
            right_branch,
            path,
            llm,
            dry_run,
        } => {
            if dry_run {
                chronicler
                    .release_notes_prompt(&path, &left_branch, &right_branch)
                    .await
            } else {
                chronicler
                    .release_notes(&path, &left_branch, &right_branch, llm.choice())
                    .await
            }
        }
        Command::Commit { path, llm, dry_run } => {
            if dry_run {
                chronicler.commit_description_prompt(&path).await
            } else {
                chronicler.commit_description(&path, llm.choice()).await
            }
        }
    }
}

/// Log to stderr so stdout carries only the generated text.
fn init_tracing(verbose: bool) -> Result<()> {
    let mut filter = match std::env::var(LOG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(&value)
            .with_context(|| format!("Invalid {} value '{}'", LOG_ENV_VAR, value))?,
        _ => EnvFilter::new(DEFAULT_LOG_FILTER),
    };

    if verbose {
        filter = filter.add_directive("chronicler=debug".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install tracing subscriber: {}", e))
}
