use utoipa::OpenApi;

use crate::{api, app::AppState};

#[derive(OpenApi)]
#[openapi(info(
    title = "birthday-backend",
    description = "Birthday greeting service API",
    version = "0.1.0",
))]
pub struct ApiDoc;

impl ApiDoc {
    pub fn all(state: AppState) -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(api::common::health_check_router(state.clone()).into_openapi());
        doc.merge(api::hello::hello_router(state).into_openapi());
        doc
    }
}
