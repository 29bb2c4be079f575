use std::collections::BTreeMap;

use axum::{extract::Path, Extension, Json};
use cartzy_core::{i18n, Language};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse};

#[derive(Debug, Serialize)]
pub(super) struct TranslationsItem {
    language: Language,
    strings: BTreeMap<&'static str, &'static str>,
}

pub(super) async fn get_translations(
    Extension(req_id): Extension<RequestId>,
    Path(lang): Path<String>,
) -> Result<Json<ApiResponse<TranslationsItem>>, ApiError> {
    let language = lang
        .parse::<Language>()
        .map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.to_string()))?;

    Ok(Json(ApiResponse::new(
        req_id.0,
        TranslationsItem {
            language,
            strings: i18n::strings(language),
        },
    )))
}
