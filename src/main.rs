use anyhow::Context;
use clap::Parser;
use yob_verify::server::{self, shutdown_signal};
use yob_verify::utils::{logger, validation::Validate};
use yob_verify::{create_router, AppState, CsvRecordSource, RecordLookup, RecordStore, ServeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ServeConfig::parse();

    // 合併命令列與 TOML 配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 初始化日誌
    logger::init_logger(
        config.verbose,
        config.log_format(),
        config.log_level.as_deref(),
    );

    tracing::info!("Starting yob-verify");
    tracing::debug!("Resolved config: {:?}", config);

    // 載入資料：檔案不存在時以空資料庫繼續運行
    let source = CsvRecordSource::new(&config.data_path);
    let store = match RecordStore::load(&source) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Failed to load records from {}: {}", config.data_path, e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!("📁 Serving {} records", store.len());

    let router = create_router(AppState::new(store));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    tracing::info!("Listening on http://{}", address);

    server::serve(listener, router, async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
    })
    .await?;

    tracing::info!("Server stopped cleanly");
    Ok(())
}
