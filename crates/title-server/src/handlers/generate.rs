use actix_web::{web, HttpResponse};
use serde::Serialize;
use title_core::{GenerateRequestBody, GenerationRequest, GenerationResult, TokenUsage};

use crate::error::Result;
use crate::logging::preview;
use crate::session::UserSession;
use crate::state::AppState;

const LOG_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub titles: Vec<String>,
    pub test_mode: bool,
    pub usage: Option<TokenUsage>,
}

impl From<GenerationResult> for GenerateResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            success: true,
            test_mode: result.mode.is_test(),
            titles: result.titles,
            usage: result.usage,
        }
    }
}

pub async fn handler(
    state: web::Data<AppState>,
    session: UserSession,
    body: web::Json<GenerateRequestBody>,
) -> Result<HttpResponse> {
    let body = body.into_inner();
    log::info!(
        "[{}] Generate request: topic={:?}",
        session.user_id,
        body.topic.as_deref().map(|t| preview(t, LOG_PREVIEW_CHARS))
    );

    let request = GenerationRequest::validate(body).map_err(|e| {
        log::info!("[{}] Rejected generate request: {}", session.user_id, e);
        e
    })?;
    log::debug!(
        "[{}] {} sample(s): {:?}",
        session.user_id,
        request.samples.len(),
        preview(&request.samples_text(), LOG_PREVIEW_CHARS)
    );

    let strategy = state.select_strategy();
    log::info!("[{}] Generating in {:?} mode", session.user_id, strategy.mode());

    let result = strategy.generate(&request).await.map_err(|e| {
        log::error!("[{}] Generation failed: {}", session.user_id, e);
        e
    })?;
    log::info!(
        "[{}] Generated {} title(s)",
        session.user_id,
        result.titles.len()
    );

    Ok(HttpResponse::Ok().json(GenerateResponse::from(result)))
}
