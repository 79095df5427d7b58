use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pathfinder::config::Config;
use pathfinder::input::ResumeSource;
use pathfinder::llm_client::{self, LlmClient};
use pathfinder::report::render_dashboard;
use pathfinder::{AnalysisController, AppState, GeminiAnalyzer, Submission};

#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(about = "Map a resume and career interests to roles, skill gaps and a learning roadmap")]
#[command(group(ArgGroup::new("resume_input").required(true).args(["resume", "resume_file"])))]
struct Cli {
    /// Resume text, inline
    #[arg(long)]
    resume: Option<String>,

    /// Resume file (.pdf is extracted, anything else read as text; `-` for stdin)
    #[arg(long, value_name = "PATH")]
    resume_file: Option<PathBuf>,

    /// Career interests and goals
    #[arg(long)]
    interests: String,

    /// Print the raw analysis JSON instead of the dashboard
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Pathfinder v{}", env!("CARGO_PKG_VERSION"));

    let source = match (cli.resume, cli.resume_file) {
        (Some(text), _) => ResumeSource::Inline(text),
        (None, Some(path)) => ResumeSource::from_path(path),
        (None, None) => bail!("Provide --resume or --resume-file"),
    };
    let resume = source.load().await?;

    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.analysis_timeout,
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let controller =
        AnalysisController::new(Arc::new(GeminiAnalyzer::new(llm)), config.analysis_timeout);
    let mut state_rx = controller.subscribe();

    match controller.submit(resume, cli.interests) {
        Submission::Started { .. } => info!("Analyzing profile..."),
        Submission::Rejected(e) => bail!("Cannot analyze: {e}"),
        Submission::AlreadyAnalyzing | Submission::NotIdle => {
            bail!("Analysis could not be started")
        }
    }

    let settled = state_rx.wait_for(|state| !state.is_analyzing()).await?.clone();

    match settled {
        AppState::Results(analysis) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", render_dashboard(&analysis));
            }
            Ok(())
        }
        AppState::Error(message) => {
            controller.reset();
            bail!("Analysis Failed: {message}")
        }
        AppState::Idle | AppState::Analyzing => bail!("Analysis was abandoned"),
    }
}
