use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use text_refiner::application::services::ExportService;
use text_refiner::infrastructure::diff::WordDiffRenderer;
use text_refiner::infrastructure::export::default_exporters;
use text_refiner::infrastructure::llm::create_llm_client;
use text_refiner::infrastructure::observability::{TracingConfig, init_tracing};
use text_refiner::infrastructure::text_processing::CompositeFileLoader;
use text_refiner::presentation::cli::{Cli, Commands, RefineArgs, run_refine};
use text_refiner::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    match cli.command {
        Some(Commands::Refine(args)) => refine(args, settings).await,
        Some(Commands::Serve { port }) => serve(settings, port).await,
        None => serve(settings, None).await,
    }
}

async fn serve(mut settings: Settings, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        settings.server.port = port;
    }

    let llm_client = create_llm_client(&settings.llm)?;
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let export_service = ExportService::new(default_exporters(&settings.export.filename_stem));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState::new(
        llm_client,
        file_loader,
        export_service,
        Arc::new(WordDiffRenderer),
        settings,
    );
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn refine(args: RefineArgs, settings: Settings) -> anyhow::Result<()> {
    let llm_client = create_llm_client(&settings.llm)?;
    let outcome = run_refine(&args, &settings, llm_client).await?;

    println!("{}", outcome.state.refined_text);

    if let Some(diff) = outcome.diff {
        eprintln!("\n--- diff ---\n{}", diff);
    }
    if let Some(path) = outcome.exported {
        eprintln!("Exported to {}", path.display());
    }
    if args.copy && !outcome.copied {
        eprintln!("Could not copy to the clipboard");
    }

    Ok(())
}
