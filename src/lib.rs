pub mod cli;
pub mod modules;
pub mod shared;

use cli::{render_checklist, render_update, CliCommand};
use modules::{
    catalog::{CatalogRepository, RebrickableAdapter, RateLimitClient},
    checklist::{
        commands::{self, ChecklistState, LoadSetRequest, UpdateProgressRequest},
        ChecklistService, JsonFileProgressStore, ProgressStore,
    },
};
use shared::{utils::init_logger, utils::LogContext, AppConfig};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Wire the catalog adapter and progress store into a shared checklist service
pub async fn build_checklist(config: &AppConfig) -> anyhow::Result<ChecklistState> {
    let catalog: Arc<dyn CatalogRepository> = Arc::new(RebrickableAdapter::with_client(
        RateLimitClient::for_rebrickable(),
        &config.api_key,
        &config.base_url,
    ));
    let file_store = JsonFileProgressStore::open(&config.store_path).await?;
    log::info!("Progress file: {}", file_store.path().display());
    let store: Arc<dyn ProgressStore> = Arc::new(file_store);

    let service = ChecklistService::new(catalog, store).with_page_size(config.page_size);
    Ok(Arc::new(Mutex::new(service)))
}

/// Entry point for the `brick-checklist` binary; `args` excludes the program name
pub async fn run<I, S>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let command = CliCommand::parse(args)?;
    let config = AppConfig::from_env()?;
    log::debug!(
        "Using catalog {} with progress file {}",
        config.base_url,
        config.store_path.display()
    );

    let checklist = build_checklist(&config).await?;

    let loaded = commands::load_set(
        LoadSetRequest {
            set_number: command.set().to_string(),
        },
        &checklist,
    )
    .await
    .map_err(anyhow::Error::msg)?;

    let output = match command {
        CliCommand::Show { .. } => render_checklist(&loaded),
        CliCommand::Add { part, color, .. } => {
            let request = UpdateProgressRequest {
                component_id: part,
                variant_id: color,
            };
            let update = commands::increment_component(request, &checklist)
                .await
                .map_err(anyhow::Error::msg)?;
            render_update(&update)
        }
        CliCommand::Remove { part, color, .. } => {
            let request = UpdateProgressRequest {
                component_id: part,
                variant_id: color,
            };
            let update = commands::decrement_component(request, &checklist)
                .await
                .map_err(anyhow::Error::msg)?;
            render_update(&update)
        }
    };

    println!("{}", output);
    Ok(())
}

/// Log and flatten a top-level failure into the exit message
pub fn report_failure(error: &anyhow::Error) -> String {
    LogContext::error_with_context(&**error, "brick-checklist failed");
    error.to_string()
}
