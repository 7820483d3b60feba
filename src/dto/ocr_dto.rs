use serde::Deserialize;
use validator::Validate;

// Texto reconocido por el OCR del cliente
#[derive(Debug, Deserialize, Validate)]
pub struct OcrExtractRequest {
    #[validate(length(max = 20000))]
    pub text: String,
}
