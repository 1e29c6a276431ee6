//! Common routes
//!

use model::HealthCheckMessage;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::utils::Json;
use crate::{app::S, create_counters};

pub const PATH_HEALTH_CHECK: &str = "/";

/// Check that the server is running.
#[utoipa::path(
    get,
    path = PATH_HEALTH_CHECK,
    responses(
        (status = 200, description = "Server is running.", body = HealthCheckMessage),
    ),
)]
pub async fn get_health_check() -> Json<HealthCheckMessage> {
    COMMON.get_health_check.incr();
    HealthCheckMessage::default().into()
}

pub fn health_check_router(state: S) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_health_check))
        .with_state(state)
}

create_counters!(CommonCounters, COMMON, get_health_check,);
