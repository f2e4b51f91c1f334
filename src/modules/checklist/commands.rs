use super::application::service::ChecklistService;
use super::domain::{ChecklistProgress, ComponentKey, ComponentProgress, LoadState};

use crate::{log_debug, log_error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle the command layer operates on
pub type ChecklistState = Arc<Mutex<ChecklistService>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSetRequest {
    pub set_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    pub component_id: String,
    pub variant_id: String,
}

impl UpdateProgressRequest {
    fn key(&self) -> ComponentKey {
        ComponentKey::new(self.component_id.clone(), self.variant_id.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressResponse {
    pub component_id: String,
    pub variant_id: String,
    pub collected: u32,
    pub progress: ChecklistProgress,
}

/// Everything a front end needs to draw the checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub identifier: Option<String>,
    pub display_name: Option<String>,
    pub state: LoadState,
    pub progress: ChecklistProgress,
    pub components: Vec<ComponentProgress>,
}

impl ChecklistResponse {
    fn from_service(service: &ChecklistService) -> Self {
        Self {
            identifier: service.current_identifier().map(|id| id.to_string()),
            display_name: service.summary().map(|s| s.display_name.clone()),
            state: service.state().clone(),
            progress: service.progress(),
            components: service.component_progress(),
        }
    }
}

pub async fn load_set(
    request: LoadSetRequest,
    checklist: &ChecklistState,
) -> Result<ChecklistResponse, String> {
    let mut service = checklist.lock().await;
    match service.load(&request.set_number).await {
        Ok(identifier) => {
            log_debug!("Set {} ready", identifier);
            Ok(ChecklistResponse::from_service(&service))
        }
        Err(e) => {
            log_error!("Failed to load set '{}': {}", request.set_number, e);
            Err(e.to_string())
        }
    }
}

pub async fn get_checklist(checklist: &ChecklistState) -> ChecklistResponse {
    let service = checklist.lock().await;
    ChecklistResponse::from_service(&service)
}

pub async fn increment_component(
    request: UpdateProgressRequest,
    checklist: &ChecklistState,
) -> Result<UpdateProgressResponse, String> {
    let mut service = checklist.lock().await;
    let collected = service
        .increment(&request.key())
        .await
        .map_err(|e| e.to_string())?;

    Ok(UpdateProgressResponse {
        progress: service.progress(),
        component_id: request.component_id,
        variant_id: request.variant_id,
        collected,
    })
}

pub async fn decrement_component(
    request: UpdateProgressRequest,
    checklist: &ChecklistState,
) -> Result<UpdateProgressResponse, String> {
    let mut service = checklist.lock().await;
    let collected = service
        .decrement(&request.key())
        .await
        .map_err(|e| e.to_string())?;

    Ok(UpdateProgressResponse {
        progress: service.progress(),
        component_id: request.component_id,
        variant_id: request.variant_id,
        collected,
    })
}
