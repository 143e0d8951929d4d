use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::BetId;
use tracing::Instrument;

use crate::{
    domain::{Bet, BetSummary, CreateBetRequest, CreateBetResponse},
    errors::{AppError, Result},
    extractors::ValidatedJson,
    state::AppState,
};

fn parse_bet_id(raw: String) -> Result<BetId> {
    BetId::try_from(raw).map_err(AppError::InvalidBetId)
}

pub async fn create_bet(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBetRequest>,
) -> Result<Json<CreateBetResponse>> {
    // Span covers the whole creation lifecycle, storage included
    let span = tracing::info_span!(
        "create_bet",
        draw_count = req.previous_results.len(),
        generate_bet = req.generate_bet
    );

    async move {
        let response = state.create_bet_service().execute(req).await?;
        tracing::info!(bet_id = %response.bet_id, "Bet created successfully");
        Ok::<_, AppError>(Json(response))
    }
    .instrument(span)
    .await
}

pub async fn get_bet(
    State(state): State<AppState>,
    Path(bet_id): Path<String>,
) -> Result<Json<Bet>> {
    let span = tracing::info_span!("get_bet", %bet_id);

    async move {
        let bet_id = parse_bet_id(bet_id)?;
        let bet = state.get_bet_service().execute(&bet_id).await?;

        tracing::debug!(generated = bet.is_generated(), "Bet retrieved");
        Ok::<_, AppError>(Json(bet))
    }
    .instrument(span)
    .await
}

pub async fn list_bets(State(state): State<AppState>) -> Result<Json<Vec<BetSummary>>> {
    async move {
        let bets = state.get_all_bets_info_service().execute().await?;

        tracing::debug!(bet_count = bets.len(), "Retrieved bets");
        Ok::<_, AppError>(Json(bets))
    }
    .instrument(tracing::info_span!("list_bets"))
    .await
}

pub async fn delete_bet(
    State(state): State<AppState>,
    Path(bet_id): Path<String>,
) -> Result<StatusCode> {
    let span = tracing::info_span!("delete_bet", %bet_id);

    async move {
        let bet_id = parse_bet_id(bet_id)?;
        state.delete_bet_service().execute(&bet_id).await?;

        tracing::info!("Bet deleted");
        Ok::<_, AppError>(StatusCode::NO_CONTENT)
    }
    .instrument(span)
    .await
}
