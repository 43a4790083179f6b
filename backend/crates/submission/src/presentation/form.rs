//! Multipart form parsing

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;

use crate::domain::value_objects::{DocumentUpload, RawApplicantFields};
use crate::error::{SubmissionError, SubmissionResult};

/// Form field names
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const UNIVERSITY: &str = "university";
    pub const PROGRAM: &str = "program";
    pub const DOCUMENT: &str = "document";
    pub const INIT_DATA: &str = "initData";
}

/// Decoded application form
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub fields: RawApplicantFields,
    pub document: Option<DocumentUpload>,
    /// Init data sent as a form field instead of a header
    pub init_data: Option<String>,
}

impl SubmissionForm {
    /// Read every part of the body; unknown parts are skipped
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_document_bytes: usize,
    ) -> SubmissionResult<Self> {
        let too_large = |e: MultipartError| map_multipart_error(e, max_document_bytes);
        let mut form = SubmissionForm::default();

        while let Some(field) = multipart.next_field().await.map_err(too_large)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                fields::DOCUMENT => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(too_large)?.to_vec();
                    form.document = Some(DocumentUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                fields::FIRST_NAME => {
                    form.fields.first_name = Some(field.text().await.map_err(too_large)?)
                }
                fields::LAST_NAME => {
                    form.fields.last_name = Some(field.text().await.map_err(too_large)?)
                }
                fields::UNIVERSITY => {
                    form.fields.university = Some(field.text().await.map_err(too_large)?)
                }
                fields::PROGRAM => {
                    form.fields.program = Some(field.text().await.map_err(too_large)?)
                }
                fields::INIT_DATA => {
                    form.init_data = Some(field.text().await.map_err(too_large)?)
                }
                other => {
                    tracing::debug!(field = %other, "Ignoring unknown form field");
                }
            }
        }

        Ok(form)
    }
}

fn map_multipart_error(err: MultipartError, limit: usize) -> SubmissionError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        SubmissionError::DocumentTooLarge { limit }
    } else {
        err.into()
    }
}
