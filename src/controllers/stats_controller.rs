use chrono::{Local, NaiveDate};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::stats::{StatsResponse, StatsWindow};
use crate::repositories::call_repository::CallRepository;
use crate::services::stats_aggregator::aggregate;
use crate::utils::errors::{AppError, AppResult};

pub struct StatsController {
    repository: CallRepository,
}

impl StatsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CallRepository::new(pool),
        }
    }

    /// Estadísticas de la ventana; `user_id` en `None` agrega a todos los usuarios
    pub async fn window_stats(
        &self,
        user_id: Option<Uuid>,
        window: StatsWindow,
    ) -> AppResult<StatsResponse> {
        self.window_stats_at(user_id, window, Local::now().date_naive()).await
    }

    pub async fn window_stats_at(
        &self,
        user_id: Option<Uuid>,
        window: StatsWindow,
        today: NaiveDate,
    ) -> AppResult<StatsResponse> {
        let (from, to) = window.date_range(today);
        let rows = self.repository.stats_rows(user_id, from, to).await?;
        let stats = aggregate(&rows);

        tracing::debug!(
            "📊 Stats {} ({} - {}): {} llamadas, {} horas",
            window.as_str(),
            from,
            to,
            stats.total_calls,
            stats.total_hours
        );

        Ok(StatsResponse {
            window,
            from,
            to,
            stats,
        })
    }
}

/// Interpretar el parámetro `window`, por defecto hoy
pub fn parse_window(raw: Option<&str>) -> AppResult<StatsWindow> {
    match raw {
        None => Ok(StatsWindow::default()),
        Some(value) => value.parse().map_err(AppError::BadRequest),
    }
}
