use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use text_completion::{build_prompt, UpstreamError};
use tokio::sync::oneshot;
use tracing::*;

use crate::{form::RecipeForm, page, AppError, WebHandler};

/// Builds the prompt and waits for the request handler's answer.
async fn generate_recipe(handler: &WebHandler, components: &str) -> Result<String, AppError> {
    debug!("generate_recipe components={}", components);

    let (tx, rx) = oneshot::channel();
    handler
        .request_handler
        .answer_request(build_prompt(components), tx);

    let recipe = rx.await.map_err(|_| UpstreamError::Canceled)??;
    Ok(recipe)
}

pub async fn index() -> Html<String> {
    Html(page::render(""))
}

pub async fn submit(
    State(handler): State<WebHandler>,
    form: RecipeForm,
) -> Result<Response, AppError> {
    if form.is_reset() {
        return Ok(Redirect::to("/").into_response());
    }

    let recipe = generate_recipe(&handler, form.components()?).await?;
    Ok(Html(page::render(&recipe)).into_response())
}

pub async fn generate(
    State(handler): State<WebHandler>,
    form: RecipeForm,
) -> Result<String, AppError> {
    generate_recipe(&handler, form.components()?).await
}
