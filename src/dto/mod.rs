pub mod api_response;
pub mod auth_dto;
pub mod ocr_dto;

pub use api_response::ApiResponse;
