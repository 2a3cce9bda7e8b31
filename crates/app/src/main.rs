use std::fmt;
use std::sync::Arc;

use api::{ApiConfig, Backend, RestBackend};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ArtworkService, QuestionService, StatsService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    backend: Arc<dyn Backend>,
    artwork_service: Arc<ArtworkService>,
    question_service: Arc<QuestionService>,
    stats_service: Arc<StatsService>,
    api_config: ApiConfig,
}

impl UiApp for DesktopApp {
    fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    fn artwork_service(&self) -> Arc<ArtworkService> {
        Arc::clone(&self.artwork_service)
    }

    fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    fn stats_service(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats_service)
    }

    fn api_config(&self) -> ApiConfig {
        self.api_config.clone()
    }
}

struct Args {
    api_url: Option<String>,
    image_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--image-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url   http://localhost:8000/api");
    eprintln!("  --image-url http://localhost:8000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MUSEUM_API_URL, MUSEUM_IMAGE_URL  (flags take precedence)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = None;
        let mut image_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => api_url = Some(require_value(args, "--api-url")?),
                "--image-url" => image_url = Some(require_value(args, "--image-url")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api_url, image_url })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Env vars provide the baseline; flags override per invocation.
    let from_env = ApiConfig::from_env()?;
    let config = ApiConfig::new(
        parsed
            .api_url
            .unwrap_or_else(|| from_env.base_url().to_string()),
        parsed
            .image_url
            .unwrap_or_else(|| from_env.image_base_url().to_string()),
    )?;

    tracing::info!(api_url = config.base_url(), "starting museum admin client");

    let backend: Arc<dyn Backend> = Arc::new(RestBackend::new(config.clone()));
    let app = DesktopApp {
        backend: Arc::clone(&backend),
        artwork_service: Arc::new(ArtworkService::new(Arc::clone(&backend))),
        question_service: Arc::new(QuestionService::new(Arc::clone(&backend))),
        stats_service: Arc::new(StatsService::new(backend)),
        api_config: config,
    };

    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Museum Admin")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
