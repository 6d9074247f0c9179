use leptos::prelude::*;

use crate::models::records::AnalyzedRecord;

#[server(FetchAnalysis, "/api")]
pub async fn fetch_analysis() -> Result<Vec<AnalyzedRecord>, ServerFnError> {
    use log::{debug, error, info};

    use crate::config::AnalysisConfig;
    use crate::state::AppState;

    #[derive(Debug, thiserror::Error)]
    enum AnalysisError {
        #[error("reqwest error: {0}")]
        Request(String),
        #[error("JSON parse error: {0}")]
        Parse(String),
    }

    fn to_server_error(e: AnalysisError) -> ServerFnError {
        ServerFnError::ServerError(e.to_string())
    }

    // configured state when called through the server, env fallback otherwise
    let analysis = use_context::<AppState>()
        .map(|state| state.analysis)
        .unwrap_or_else(AnalysisConfig::from_env);

    info!("fetching analysis from {}", analysis.analyze_url);

    let response = reqwest::get(&analysis.analyze_url)
        .await
        .map_err(|e| {
            error!("analysis request failed: {e}");
            AnalysisError::Request(e.to_string())
        })
        .map_err(to_server_error)?;

    // status is logged but not branched on; a failing body fails the parse below
    debug!("analysis response status: {}", response.status());

    let body = response
        .text()
        .await
        .map_err(|e| {
            error!("error reading analysis response body: {e}");
            AnalysisError::Request(e.to_string())
        })
        .map_err(to_server_error)?;

    let records: Vec<AnalyzedRecord> = serde_json::from_str(&body).map_err(|e| {
        error!("JSON parse error: {e}. Body: {body}");
        AnalysisError::Parse(e.to_string())
    }).map_err(to_server_error)?;

    info!("analysis returned {} records", records.len());
    Ok(records)
}
