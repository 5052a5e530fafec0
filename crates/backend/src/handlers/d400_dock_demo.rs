use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::callbacks::{BindingDescriptor, UpdateRequest};
use contracts::shared::component::Component;
use contracts::shared::dock::TabCount;

use crate::shared::app_state::{get_app_state, AppState};
use crate::system::middleware::request_logger::SESSION_HEADER;

/// GET /api/page/layout
pub async fn page_layout() -> Json<Component> {
    Json(get_app_state().page.clone())
}

/// GET /api/page/dependencies
pub async fn dependencies() -> Json<Vec<BindingDescriptor>> {
    Json(get_app_state().bindings.descriptors())
}

/// POST /api/page/update
///
/// Answers 204 when no server binding depends on the changed input.
pub async fn update(headers: HeaderMap, Json(request): Json<UpdateRequest>) -> Response {
    let session = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    run_update(get_app_state(), session, &request)
}

fn run_update(state: &AppState, session: &str, request: &UpdateRequest) -> Response {
    match &request.changed {
        Some(changed) => tracing::debug!(session = %session, "update triggered by {}", changed),
        None => tracing::debug!(session = %session, "initial update"),
    }

    let response = state.bindings.dispatch(&state.dock, request);
    if response.outputs.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(response).into_response()
}

/// GET /api/dock/model
pub async fn dock_model() -> Json<serde_json::Value> {
    Json(get_app_state().dock.model().to_value())
}

/// GET /api/dock/stats
pub async fn dock_stats() -> Json<TabCount> {
    Json(get_app_state().dock.tab_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::app_state::init_for_tests;
    use axum::body::to_bytes;
    use contracts::dashboards::d400_dock_demo::*;
    use contracts::shared::callbacks::{BindingLocation, InputValue, PropRef, UpdateResponse};
    use contracts::shared::dock::DockModel;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_update_dataset_selection() {
        init_for_tests();
        let request = UpdateRequest {
            changed: Some(PropRef::new(DATASET_SELECTOR, PROP_VALUE)),
            inputs: vec![InputValue::new(
                DATASET_SELECTOR,
                PROP_VALUE,
                serde_json::json!(["b", "a"]),
            )],
        };
        let response = update(HeaderMap::new(), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: UpdateResponse = body_json(response).await;
        assert_eq!(body.outputs.len(), 1);
        assert_eq!(body.outputs[0].id, SELECTED_DATASETS_DISPLAY);
        assert_eq!(body.outputs[0].value, "Selected datasets: b, a");
    }

    #[tokio::test]
    async fn test_theme_switch_is_not_served() {
        let state = init_for_tests();
        let request = UpdateRequest {
            changed: Some(PropRef::new(COLOR_SCHEME_SWITCH, PROP_CHECKED)),
            inputs: vec![InputValue::new(COLOR_SCHEME_SWITCH, PROP_CHECKED, true)],
        };
        let response = run_update(state, "test", &request);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_initial_update_fills_every_output() {
        let state = init_for_tests();
        let request = UpdateRequest {
            changed: None,
            inputs: vec![
                InputValue::new(DATASET_SELECTOR, PROP_VALUE, serde_json::json!(["a"])),
                InputValue::new(CHART_TYPE_SELECTOR, PROP_VALUE, "line"),
            ],
        };
        let body: UpdateResponse = body_json(run_update(state, "test", &request)).await;
        let mut ids: Vec<&str> = body.outputs.iter().map(|o| o.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(
            ids,
            vec![
                CONSOLE_OUTPUT,
                DOCK_CONTAINER,
                DATA_REFRESH_STATUS,
                MAIN_CHART_CONTAINER,
                SELECTED_CHART_TYPE,
                SELECTED_DATASETS_DISPLAY,
            ]
        );
    }

    #[tokio::test]
    async fn test_dependencies_mark_theme_as_client() {
        init_for_tests();
        let Json(descriptors) = dependencies().await;
        let theme = descriptors
            .iter()
            .find(|d| d.inputs.contains(&PropRef::new(COLOR_SCHEME_SWITCH, PROP_CHECKED)))
            .unwrap();
        assert_eq!(theme.location, BindingLocation::Client);
        assert!(descriptors
            .iter()
            .filter(|d| d.name != theme.name)
            .all(|d| d.location == BindingLocation::Server));
    }

    #[tokio::test]
    async fn test_dock_model_and_stats() {
        init_for_tests();
        let Json(value) = dock_model().await;
        let model = DockModel::from_value(value).unwrap();
        assert_eq!(model.validate(), Ok(()));
        let Json(stats) = dock_stats().await;
        assert_eq!(stats.total, 5);
        assert_eq!(stats.border_tabs, 2);
    }
}
