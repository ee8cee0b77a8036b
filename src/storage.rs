use crate::errors::AppError;
use crate::models::BudgetData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("BUDGET_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/budget.json"))
}

/// Reads the stored budget blob. A missing file means a fresh start; a file
/// that cannot be read or parsed is logged and treated the same way, never
/// surfaced to the caller.
pub async fn load_data(path: &Path) -> BudgetData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse budget file: {err}");
                BudgetData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BudgetData::default(),
        Err(err) => {
            error!("failed to read budget file: {err}");
            BudgetData::default()
        }
    }
}

/// Writes the full mapping back to disk. An empty store is never written:
/// a load that found nothing must not overwrite a previously saved file.
pub async fn persist_data(path: &Path, data: &BudgetData) -> Result<(), AppError> {
    if data.periods.is_empty() {
        return Ok(());
    }
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
