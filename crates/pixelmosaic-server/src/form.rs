//! Multipart form parsing for `POST /process`.

use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::Multipart;
use pixelmosaic_core::{is_supported_filename, TransformParams};

use crate::error::AppError;

/// Text returned when the upload is missing or has a disallowed extension.
pub const REJECTION_MESSAGE: &str = "Please upload a valid image file!";

/// A file part of the form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// The raw fields of a `/process` submission.
#[derive(Debug, Default)]
pub struct ProcessForm {
    pub image: Option<UploadedFile>,
    pub pixel_size: Option<String>,
    pub hue: Option<String>,
    pub saturation: Option<String>,
}

impl ProcessForm {
    /// Read all known fields from a multipart body. Unknown fields are
    /// skipped.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ProcessForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "image" => {
                    let file_name = field.file_name().unwrap_or_default().to_owned();
                    let bytes = field.bytes().await?;
                    form.image = Some(UploadedFile { file_name, bytes });
                }
                "pixel_size" => form.pixel_size = Some(field.text().await?),
                "hue" => form.hue = Some(field.text().await?),
                "saturation" => form.saturation = Some(field.text().await?),
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// Parse the numeric fields.
    pub fn params(&self) -> Result<TransformParams, AppError> {
        Ok(TransformParams {
            pixel_size: parse_field("pixel_size", self.pixel_size.as_deref())?,
            hue: parse_field("hue", self.hue.as_deref())?,
            saturation: parse_field("saturation", self.saturation.as_deref())?,
        })
    }

    /// Take the uploaded file if it passes the extension check.
    ///
    /// An absent file part and a file part with an empty name (what browsers
    /// send when nothing was picked) both count as missing.
    pub fn into_valid_image(self) -> Option<UploadedFile> {
        self.image
            .filter(|file| is_supported_filename(&file.file_name))
    }
}

fn parse_field<T>(field: &'static str, value: Option<&str>) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = value.ok_or_else(|| AppError::InvalidField {
        field,
        reason: "missing".to_string(),
    })?;

    raw.trim().parse().map_err(|e: T::Err| AppError::InvalidField {
        field,
        reason: format!("{raw:?}: {e}"),
    })
}
