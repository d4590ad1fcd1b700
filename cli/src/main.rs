//! pytutor binary: load env and settings, run startup checks, serve.
//!
//! Startup is deliberately eager: a missing API key or an unreadable
//! questions CSV exits the process instead of failing on the first request.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pytutor::{OpenRouterChat, PromptTemplate, QuestionRegistry};
use serve::AppState;

#[derive(Parser, Debug)]
#[command(name = "pytutor")]
#[command(about = "pytutor: tutoring-prompt relay over an OpenAI-compatible model")]
struct Args {
    /// Bind address (overrides BIND_ADDR)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,

    /// Path to the questions CSV (overrides QUESTIONS_CSV)
    #[arg(long, value_name = "PATH")]
    questions: Option<PathBuf>,

    /// Model name (overrides TUTOR_MODEL)
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    config::load_and_apply(None)?;
    let mut settings = config::Settings::from_env()?;
    if let Some(addr) = args.addr {
        settings.bind_addr = addr;
    }
    if let Some(path) = args.questions {
        settings.questions_csv = path;
    }
    if let Some(model) = args.model {
        settings.model = model;
    }

    let registry = QuestionRegistry::load(&settings.questions_csv)?;
    let prompt = PromptTemplate::load_or_default(None)?;
    let llm = OpenRouterChat::new(
        settings.api_key.clone(),
        &settings.base_url,
        settings.model.clone(),
    )
    .with_timeout(settings.upstream_timeout);

    info!(
        model = %settings.model,
        base_url = %settings.base_url,
        questions = registry.len(),
        allowed_origin = %settings.allowed_origin,
        "starting relay"
    );

    let state = Arc::new(AppState {
        registry: Arc::new(registry),
        prompt,
        llm: Arc::new(llm),
        allowed_origin: settings.allowed_origin.clone(),
    });
    serve::run_serve(&settings.bind_addr, state).await
}
