use std::process::ExitCode;

use matchcast::banner;
use matchcast::client::PredictionClient;
use matchcast::config::AppConfig;
use matchcast::container::{shared, HtmlContainer};
use matchcast::form::{parse_field_pairs, FIELD_NAMES};
use matchcast::handler::PredictionFormHandler;
use matchcast::models::PredictionOutcome;

#[tokio::main]
async fn main() -> ExitCode {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("ℹ️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("🚀 Using prediction service at {}", config.predict_url());

    let fields = parse_field_pairs(std::env::args().skip(1));
    let handler = PredictionFormHandler::new(
        PredictionClient::new(reqwest::Client::new(), config),
        shared(HtmlContainer::new("result")),
    );

    let outcome = match handler.handle_fields(&fields).await {
        Ok(outcome) => outcome,
        Err(e) => {
            let usage: Vec<String> = FIELD_NAMES.iter().map(|name| format!("{}=<value>", name)).collect();
            eprintln!("❌ {}", e);
            eprintln!("   usage: matchcast {}", usage.join(" "));
            return ExitCode::from(2);
        }
    };

    println!("{}", handler.container().lock().await.content());

    match outcome {
        PredictionOutcome::TransportError(_) => ExitCode::FAILURE,
        PredictionOutcome::Success(_) | PredictionOutcome::ApplicationError(_) => ExitCode::SUCCESS,
    }
}
