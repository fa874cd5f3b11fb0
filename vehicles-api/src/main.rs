use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use vehicles_api::clients::{HttpMapsClient, HttpPricingClient};
use vehicles_api::config::environment::EnvironmentConfig;
use vehicles_api::create_app;
use vehicles_api::database;
use vehicles_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicles API - CRUD de vehículos con enriquecimiento de lectura");
    info!("==================================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Clientes de servicios externos
    let pricing = Arc::new(HttpPricingClient::new(config.pricing_api_url.clone()));
    let maps = Arc::new(HttpMapsClient::new(config.maps_api_url.clone()));

    let app_state = AppState::new(pool, config.clone(), pricing, maps);
    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /cars - Listar vehículos (sin enriquecer)");
    info!("   GET    /cars/:id - Obtener vehículo enriquecido (precio + dirección)");
    info!("   POST   /cars - Crear vehículo");
    info!("   PUT    /cars/:id - Actualizar vehículo");
    info!("   DELETE /cars/:id - Eliminar vehículo");
    info!("💰 Pricing API: {}", config.pricing_api_url);
    info!("🗺️ Maps API: {}", config.maps_api_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
