//! HTTP handlers.

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderName, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use pixelmosaic_core::process_image;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::form::{ProcessForm, REJECTION_MESSAGE};
use crate::AppState;

/// Response header carrying the per-request output id.
pub const OUTPUT_ID_HEADER: HeaderName = HeaderName::from_static("x-output-id");

const INDEX_HTML: &str = include_str!("../static/index.html");

/// `GET /`: the upload form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /process`: run an upload through the pipeline and return a JPEG.
///
/// A missing file or a disallowed extension is answered with a plain-text
/// rejection and a 200 status; nothing is decoded or written in that case.
pub async fn process(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = ProcessForm::from_multipart(multipart).await?;
    let params = form.params()?;

    let Some(upload) = form.into_valid_image() else {
        tracing::info!("rejected upload: missing file or unsupported extension");
        return Ok(REJECTION_MESSAGE.into_response());
    };

    let id = Uuid::new_v4();
    let span = tracing::info_span!("process", %id, file = %upload.file_name);
    span.in_scope(|| tracing::debug!(?params, bytes = upload.bytes.len(), "processing upload"));

    let quality = state.jpeg_quality;
    let store = state.store.clone();
    let worker_span = span.clone();
    let processed = tokio::task::spawn_blocking(move || {
        worker_span.in_scope(|| -> Result<_, AppError> {
            let processed = process_image(&upload.bytes, &params, quality)?;
            if let Some(path) = store.persist(id, &processed.jpeg)? {
                tracing::debug!(path = %path.display(), "output written");
            }
            Ok(processed)
        })
    })
    .instrument(span.clone())
    .await??;

    span.in_scope(|| {
        tracing::info!(
            width = processed.width,
            height = processed.height,
            bytes = processed.jpeg.len(),
            "processed upload"
        )
    });

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("image/jpeg")),
            (OUTPUT_ID_HEADER, output_id_value(id)?),
        ],
        processed.jpeg,
    )
        .into_response())
}

fn output_id_value(id: Uuid) -> Result<HeaderValue, AppError> {
    Ok(HeaderValue::try_from(id.to_string())?)
}
