use axum::{extract::State, Json};
use serde::Serialize;

use super::AppState;
use crate::miniapps;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub apps: Vec<String>,
}

/// GET /scan - discover (and provision) servable mini apps.
///
/// Always answers 200 with `{"apps": [...]}`. A discovery failure is logged
/// and masked by an empty catalog; the shell must never see a 5xx here.
pub async fn handler(State(state): State<AppState>) -> Json<ScanResponse> {
    let apps = match miniapps::scan(&state.miniapps_dir) {
        Ok(apps) => apps,
        Err(e) => {
            log::error!("Mini app scan failed: {}", e);
            Vec::new()
        }
    };

    log::debug!("Scan found {} servable apps", apps.len());
    Json(ScanResponse { apps })
}
