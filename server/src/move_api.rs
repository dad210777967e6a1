use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::log;
use crate::server_config::MoveBackend;
use crate::web_server::AppState;
use tictactoe_engine::{
    Board, Cell, Difficulty, LocalSearch, Mark, MoveProposer, SessionRng, sanitize_proposal,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub board: Vec<Cell>,
    pub ai_mark: Mark,
    pub player_mark: Mark,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MoveResponse {
    /// Chosen cell index, or null when the board has no legal moves.
    #[serde(rename = "move")]
    pub index: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(error: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

/// `POST /api/move`: board in, single legal cell index out.
///
/// Input-shape errors are 400s; everything downstream of a well-formed board
/// is recovered locally: an illegal or unavailable proposal becomes the
/// lowest-index legal move, never an error to the client.
pub async fn handle_move(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, (StatusCode, Json<ErrorResponse>)> {
    let board = Board::from_cells(request.board).map_err(|e| bad_request(e.to_string()))?;

    if board.legal_moves().is_empty() {
        return Ok(Json(MoveResponse { index: None }));
    }

    let me = request.ai_mark;
    let opp = request.player_mark;
    let difficulty = request.difficulty.unwrap_or(state.config.default_difficulty);

    let index = match state.config.backend {
        MoveBackend::Local => decide_local(&board, me, opp, difficulty),
        MoveBackend::Llm => {
            sanitize_proposal(&board, state.llm.suggest_move(&board, me, opp).await)
        }
    };
    log!(
        "Move for {:?} ({:?}, {:?} backend): {:?}",
        me,
        difficulty,
        state.config.backend,
        index
    );

    Ok(Json(MoveResponse { index }))
}

/// The local decision path without the HTTP plumbing.
pub fn decide_local(board: &Board, me: Mark, opp: Mark, difficulty: Difficulty) -> Option<usize> {
    let proposal = LocalSearch::new(SessionRng::from_random()).propose(board, me, opp, difficulty);
    sanitize_proposal(board, proposal)
}
