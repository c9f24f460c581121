mod analysis;
mod cli_messages;
mod clock;
mod config;
mod consts;
mod credentials;
mod dashboard;
mod error;
mod interview;
mod logging;
mod notifications;
mod resume;
mod session;
mod storage;
mod ui;

use crate::config::Config;
use crate::credentials::Service;
use crate::logging::get_rust_log_level;
use crate::session::{analyze_resume, keys_set, keys_show, keys_test, run_tui_mode};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Practice interviews and review your resume", long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Manage API keys
    Keys {
        #[command(subcommand)]
        command: KeysCommand,
    },
    /// Run the resume analysis without the dashboard
    AnalyzeResume {
        /// PDF or Word document to analyze
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Job description to target the analysis at
        #[arg(long, value_name = "TEXT")]
        job_description: Option<String>,

        /// Directory to write the report into
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum KeysCommand {
    /// Show the saved keys, masked
    Show,
    /// Save a key for one service
    Set {
        #[arg(value_enum)]
        service: Service,
        value: String,
    },
    /// Check the saved key for one service
    Test {
        #[arg(value_enum)]
        service: Service,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(get_rust_log_level().into());

    let args = Args::parse();
    let config = Config::from_env()?;

    match args.command {
        Command::Start { with_background } => run_tui_mode(config, with_background).await,
        Command::Keys { command } => match command {
            KeysCommand::Show => keys_show(&config),
            KeysCommand::Set { service, value } => keys_set(&config, service, &value),
            KeysCommand::Test { service } => keys_test(&config, service).await,
        },
        Command::AnalyzeResume {
            path,
            job_description,
            output,
        } => analyze_resume(&path, job_description, output).await,
    }
}
