//! Service request commands

use mr_core::requests::{RequestDraft, ServiceRequest};
use tracing::{info_span, Instrument};

use super::navigation::main_shell;
use crate::bootstrap::AppRuntime;

pub async fn create_request(
    runtime: &AppRuntime,
    draft: RequestDraft,
) -> Result<ServiceRequest, String> {
    let span = info_span!("command.requests.create");
    async {
        let mut mode = runtime.mode.lock().await;
        let shell = main_shell(&mut mode)?;
        shell.requests.create(draft).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

pub async fn list_requests(runtime: &AppRuntime) -> Result<Vec<ServiceRequest>, String> {
    let mut mode = runtime.mode.lock().await;
    Ok(main_shell(&mut mode)?.requests.list().to_vec())
}

pub async fn active_request_count(runtime: &AppRuntime) -> Result<usize, String> {
    let mut mode = runtime.mode.lock().await;
    Ok(main_shell(&mut mode)?.requests.active_count())
}
