use std::sync::Arc;

use advisor_engine::{
    recommend_move, Color, Difficulty, EngineError, Move, Recommendation, SearchConfig,
};
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub const MISSING_FIELDS: &str = "Missing board_fen, ai_color, or difficulty";

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchConfig>,
}

/// Body of `POST /api/get_ai_move`
#[derive(Debug, Default, Deserialize)]
pub struct MoveRequest {
    pub board_fen: Option<String>,
    pub ai_color: Option<String>,
    pub difficulty: Option<String>,
}

impl MoveRequest {
    /// All three fields, or `None` if any is absent or blank
    fn fields(self) -> Option<(String, String, String)> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Some((
            present(self.board_fen)?,
            present(self.ai_color)?,
            present(self.difficulty)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDto {
    pub from_square: String,
    pub to_square: String,
    /// Lower-case piece letter, e.g. "q"
    pub promotion: Option<String>,
}

impl From<Move> for MoveDto {
    fn from(mv: Move) -> Self {
        MoveDto {
            from_square: mv.from.to_string(),
            to_square: mv.to.to_string(),
            promotion: mv.promotion.map(|kind| kind.letter().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(rename = "move")]
    pub mv: Option<MoveDto>,
    pub message: String,
}

impl MoveResponse {
    fn found(mv: Move, message: &str) -> Self {
        MoveResponse {
            success: true,
            mv: Some(mv.into()),
            message: message.to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        MoveResponse {
            success: false,
            mv: None,
            message: message.into(),
        }
    }
}

pub fn router(search: SearchConfig) -> Router {
    let state = AppState {
        search: Arc::new(search),
    };

    Router::new()
        .route("/api/get_ai_move", post(get_ai_move))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_ai_move(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> (StatusCode, Json<MoveResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%rejection, "rejected move request body");
            return reply(StatusCode::BAD_REQUEST, MoveResponse::failure(rejection.body_text()));
        }
    };

    let Some((fen, color, difficulty)) = request.fields() else {
        return reply(StatusCode::BAD_REQUEST, MoveResponse::failure(MISSING_FIELDS));
    };
    let engine_color = Color::from_label(&color);
    let difficulty = Difficulty::from_label(&difficulty);

    info!(%fen, color = %engine_color, %difficulty, "move requested");

    let config = Arc::clone(&state.search);
    let search = tokio::task::spawn_blocking(move || {
        recommend_move(&fen, engine_color, difficulty, &config)
    })
    .await;

    match search {
        Ok(Ok(outcome)) => {
            let message = outcome.message();
            match outcome {
                Recommendation::Move(best) => {
                    info!(mv = %best.mv, score = best.score, "move found");
                    reply(StatusCode::OK, MoveResponse::found(best.mv, message))
                }
                _ => reply(StatusCode::OK, MoveResponse::failure(message)),
            }
        }
        Ok(Err(err @ EngineError::InvalidFen { .. })) => {
            warn!(%err, "unreadable position");
            reply(StatusCode::BAD_REQUEST, MoveResponse::failure(err.to_string()))
        }
        Ok(Err(err)) => {
            error!(%err, "error processing move request");
            reply(StatusCode::INTERNAL_SERVER_ERROR, MoveResponse::failure(err.to_string()))
        }
        Err(join_err) => {
            error!(%join_err, "search task failed");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                MoveResponse::failure(format!("search task failed: {join_err}")),
            )
        }
    }
}

fn reply(status: StatusCode, body: MoveResponse) -> (StatusCode, Json<MoveResponse>) {
    (status, Json(body))
}
