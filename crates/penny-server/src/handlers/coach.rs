//! Coach context handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;
use penny_core::{coach, CoachContext};

/// GET /api/coach/context - Figures and system prompt for the chat coach
///
/// The chat front end interpolates nothing itself: it takes
/// `system_prompt` verbatim and forwards it with the user's messages to
/// the hosted model.
pub async fn coach_context(State(state): State<Arc<AppState>>) -> Json<CoachContext> {
    Json(coach::coach_context(&state.budget, &state.transactions))
}
