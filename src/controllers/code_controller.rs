use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::codes::{CodeKind, CreateCodeRequest, ReferenceCode, UpdateCodeRequest};
use crate::repositories::code_repository::CodeRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct CodeController {
    repository: CodeRepository,
    kind: CodeKind,
}

impl CodeController {
    pub fn new(pool: PgPool, kind: CodeKind) -> Self {
        Self {
            repository: CodeRepository::new(pool, kind),
            kind,
        }
    }

    pub async fn list(&self, only_active: bool) -> AppResult<Vec<ReferenceCode>> {
        self.repository.list(only_active).await
    }

    pub async fn create(&self, request: CreateCodeRequest) -> AppResult<ReferenceCode> {
        request.validate()?;
        self.repository
            .create(
                request.code.trim().to_string(),
                request.description.trim().to_string(),
                request.is_active.unwrap_or(true),
            )
            .await
    }

    pub async fn update(&self, id: Uuid, request: UpdateCodeRequest) -> AppResult<ReferenceCode> {
        request.validate()?;
        self.repository
            .update(
                id,
                request.code.map(|c| c.trim().to_string()),
                request.description.map(|d| d.trim().to_string()),
                request.is_active,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(self.kind.label(), &id.to_string()));
        }
        Ok(())
    }
}
