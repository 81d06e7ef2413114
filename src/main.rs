use std::{env, process::ExitCode, sync::Arc};

use openai_api::{OpenAIConfig, OpenAIHandler};
use tracing::*;

const LISTEN_ADDR: &str = "127.0.0.1:8080";
const API_KEY_VAR: &str = "RECIPE_GENERATOR_OPENAI_API_KEY";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    info!(
        "Starting... CARGO_PKG_NAME={}, CARGO_PKG_VERSION={}, version={}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("version").unwrap_or("(not defined at compile)")
    );

    let Some(api_key) = read_env_var(API_KEY_VAR) else {
        error!("Expected env var: {}", API_KEY_VAR);
        return ExitCode::FAILURE;
    };

    let config = OpenAIConfig::new(api_key);
    info!("Completion service: {:?}", config);
    let openai_handler = Arc::new(OpenAIHandler::new(config));

    match web::serve(LISTEN_ADDR, openai_handler).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error on {}: {}", LISTEN_ADDR, e);
            ExitCode::FAILURE
        }
    }
}

fn read_env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
