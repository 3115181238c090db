use clap::Parser;
use std::io;
use std::time::Duration;

use title_llm::PromptStyle;
use title_server::config::{ServerConfig, API_KEY_ENV};
use title_server::logging::init_logging;
use title_server::run_server;

#[derive(Parser, Debug, Clone)]
#[command(name = "title-server")]
#[command(about = "Social-media title generation HTTP server")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Fixed API key. Without it DEEPSEEK_API_KEY is read on every request
    #[arg(long)]
    api_key: Option<String>,

    /// Completion API base URL
    #[arg(long, env = "LLM_BASE_URL", default_value = "https://api.deepseek.com/v1")]
    llm_base_url: String,

    /// Model name
    #[arg(long, env = "LLM_MODEL", default_value = "deepseek-chat")]
    model: String,

    /// How instructions are sent to the model
    #[arg(long, env = "PROMPT_STYLE", value_enum, default_value = "split")]
    prompt_style: PromptStyleArg,

    /// Artificial latency of test-mode responses, in milliseconds
    #[arg(long, env = "MOCK_DELAY_MS", default_value = "2000")]
    mock_delay_ms: u64,

    /// Completion API request timeout, in seconds
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value = "60")]
    llm_timeout_secs: u64,

    /// Header carrying the authenticated user id
    #[arg(long, env = "SESSION_HEADER", default_value = "x-user-id")]
    session_header: String,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PromptStyleArg {
    Split,
    Combined,
}

impl From<PromptStyleArg> for PromptStyle {
    fn from(arg: PromptStyleArg) -> Self {
        match arg {
            PromptStyleArg::Split => PromptStyle::Split,
            PromptStyleArg::Combined => PromptStyle::Combined,
        }
    }
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            api_key: cli.api_key,
            api_key_env: API_KEY_ENV.to_string(),
            llm_base_url: cli.llm_base_url,
            model: cli.model,
            prompt_style: cli.prompt_style.into(),
            mock_delay: Duration::from_millis(cli.mock_delay_ms),
            llm_timeout: Duration::from_secs(cli.llm_timeout_secs),
            session_header: cli.session_header,
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.debug, cli.log_level.as_deref());

    log::info!("Starting title server on {}:{}", cli.host, cli.port);
    log::info!("LLM Configuration:");
    log::info!("  Base URL: {}", cli.llm_base_url);
    log::info!("  Model: {}", cli.model);
    log::info!("  Prompt style: {:?}", cli.prompt_style);
    log::info!(
        "  API key: {}",
        if cli.api_key.is_some() {
            "fixed (command line)"
        } else {
            "read from DEEPSEEK_API_KEY per request"
        }
    );

    if cli.debug {
        log::debug!("Debug mode enabled");
        log::debug!("  Mock delay: {}ms", cli.mock_delay_ms);
        log::debug!("  LLM timeout: {}s", cli.llm_timeout_secs);
        log::debug!("  Session header: {}", cli.session_header);
    }

    run_server(ServerConfig::from(cli)).await
}
