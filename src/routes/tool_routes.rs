use axum::{extract::Path, routing::{get, post}, Json, Router};
use validator::Validate;

use crate::dto::ocr_dto::OcrExtractRequest;
use crate::models::vehicle::VehicleTypeResponse;
use crate::services::ocr_extractor::{extract, ExtractedCall};
use crate::services::vehicle_classifier::classify;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ocr_router() -> Router<AppState> {
    Router::new().route("/extract", post(extract_from_ocr))
}

pub fn create_vehicle_type_router() -> Router<AppState> {
    Router::new().route("/:code", get(vehicle_type))
}

async fn extract_from_ocr(Json(request): Json<OcrExtractRequest>) -> Result<Json<ExtractedCall>, AppError> {
    request.validate()?;
    Ok(Json(extract(&request.text)))
}

async fn vehicle_type(Path(code): Path<String>) -> Json<VehicleTypeResponse> {
    let category = classify(&code);
    Json(VehicleTypeResponse::new(code, category))
}
