use axum::Json;

use crate::calculators::pay::{take_home, TakeHome, TakeHomeRequest};
use crate::calculators::state::{StateTax, STATE_TAXES};
use crate::errors::AppError;

/// POST /api/v1/calculators/take-home
pub async fn handle_take_home(
    Json(req): Json<TakeHomeRequest>,
) -> Result<Json<TakeHome>, AppError> {
    take_home(&req)
        .map(Json)
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// GET /api/v1/calculators/states
pub async fn handle_list_states() -> Json<&'static [StateTax]> {
    Json(STATE_TAXES)
}
