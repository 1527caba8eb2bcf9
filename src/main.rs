use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use clap::{Parser, Subcommand};
use log::info;
use std::sync::Arc;
use std::time::Instant;

use docintake_web::config::Config;
use docintake_web::handlers;
use docintake_web::services::{AnalysisProvider, AzureAnalysisProvider, StorageService};

fn print_ascii_banner(host: &str, port: u16) {
    let banner = r#"
 ____             ___       _        _
|  _ \  ___   ___|_ _|_ __ | |_ __ _| | _____
| | | |/ _ \ / __|| || '_ \| __/ _` | |/ / _ \
| |_| | (_) | (__ | || | | | || (_| |   <  __/
|____/ \___/ \___|___|_| |_|\__\__,_|_|\_\___|
"#;
    println!("{}", banner);
    println!("         DocIntake server started at: http://{}:{}\n", host, port);
}

fn load_env() {
    dotenvy::dotenv().ok();
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Запустить веб-сервер
    Serve,
    /// Разобрать локальный файл и вывести нормализованный результат
    Analyze { file: String },
}

fn main() -> anyhow::Result<()> {
    load_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Serve) | None => actix_web::rt::System::new().block_on(run_server())?,
        Some(Commands::Analyze { file }) => {
            actix_web::rt::System::new().block_on(run_analyze(file))?
        }
    }
    Ok(())
}

async fn run_server() -> anyhow::Result<()> {
    let config = Config::new();
    let host = config.host.clone();
    let port = config.port;

    let storage = StorageService::new(config.storage_dir.clone());
    storage.ensure_dir()?;

    let provider: Arc<dyn AnalysisProvider> =
        Arc::new(AzureAnalysisProvider::from_config(&config.analysis)?);

    print_ascii_banner(&host, port);
    info!("🚀 Server running at http://{}:{}/", host, port);
    let startup_time = Instant::now();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::from(provider.clone()))
            .route("/analyze", web::post().to(handlers::analyze_document))
            .route("/image/{filename}", web::get().to(handlers::get_image))
            .route("/healthz", web::get().to(|| async { "OK" }))
    })
    .bind((host, port))?
    .run()
    .await?;

    info!("🛑 Server stopped. Uptime: {:?}", startup_time.elapsed());
    Ok(())
}

async fn run_analyze(file: &str) -> anyhow::Result<()> {
    let config = Config::new();
    let provider = AzureAnalysisProvider::from_config(&config.analysis)?;

    let bytes = std::fs::read(file)?;
    info!("Analyzing '{}' ({} bytes)", file, bytes.len());

    let result = provider.analyze(&bytes).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
