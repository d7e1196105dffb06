//! Form body extractor for both encodings browsers submit.

use crate::{AppError, AppState};

use acct_core::{FormData, UploadedFile};

use std::future::Future;

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};

/// Fields and files of a POSTed form.
///
/// `multipart/form-data` keeps file parts as uploads; anything else is
/// parsed as `application/x-www-form-urlencoded`.
///
/// A file part larger than the configured upload limit is drained but not
/// buffered, so the form can still report it as too large.
pub struct FormSubmission(pub FormData);

impl FromRequest<AppState> for FormSubmission {
    type Rejection = AppError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let is_multipart = req
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("multipart/form-data"));

            if !is_multipart {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;
                return Ok(FormSubmission(FormData::from_pairs(pairs)));
            }

            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;

            let max_upload_bytes = state.profile_limits.max_upload_bytes;
            let mut data = FormData::new();
            while let Some(mut field) = multipart.next_field().await? {
                let name = field.name().unwrap_or_default().to_string();

                match field.file_name().map(str::to_string) {
                    Some(file_name) => {
                        let mut size = 0;
                        let mut bytes = Vec::new();
                        while let Some(chunk) = field.chunk().await? {
                            size += chunk.len();
                            if size <= max_upload_bytes {
                                bytes.extend_from_slice(&chunk);
                            } else {
                                bytes = Vec::new();
                            }
                        }

                        let upload = if size > max_upload_bytes {
                            log::warn!(
                                "Discarded {} byte upload in field '{}' (limit {})",
                                size,
                                name,
                                max_upload_bytes
                            );
                            UploadedFile::oversized(file_name, size)
                        } else {
                            UploadedFile::new(file_name, bytes)
                        };
                        data.insert_file(name, upload);
                    }
                    None => {
                        let text = field.text().await?;
                        data.insert(name, text);
                    }
                }
            }

            Ok(FormSubmission(data))
        }
    }
}
