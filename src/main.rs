use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use call_log::config::environment::EnvironmentConfig;
use call_log::database;
use call_log::routes::create_app;
use call_log::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🚑 Registro de llamadas MDA - API");
    info!("================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let pool = match database::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("📞 Llamadas:");
    info!("   GET|POST /api/calls - Listar / registrar llamadas");
    info!("   GET|PUT|DELETE /api/calls/:id - Ver / actualizar / eliminar");
    info!("📊 Estadísticas:");
    info!("   GET  /api/stats?window=today|week|month");
    info!("🧰 Herramientas:");
    info!("   GET  /api/codes/:kind - Códigos de alerta / médicos");
    info!("   POST /api/ocr/extract - Extraer campos de texto OCR");
    info!("   GET  /api/vehicle-type/:code - Clasificar vehículo");
    info!("🛡️ Administración:");
    info!("   /api/admin/users, /api/admin/calls, /api/admin/stats, /api/admin/codes/:kind");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
