//! HTTP Handlers

use std::sync::Arc;

use auth::{SessionToken, SessionVerifier};
use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use crate::application::config::SubmissionConfig;
use crate::application::create_submission::{CreateSubmissionInput, CreateSubmissionUseCase};
use crate::application::lookup::LookupSubmissionUseCase;
use crate::application::update_submission::{UpdateSubmissionInput, UpdateSubmissionUseCase};
use crate::domain::repository::{BlobStore, SubmissionRepository};
use crate::error::SubmissionResult;
use crate::presentation::dto::{LookupResponse, SubmissionResponse};
use crate::presentation::form::SubmissionForm;

/// Shared state for submission handlers
#[derive(Clone)]
pub struct SubmissionAppState<R, B>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub blobs: Arc<B>,
    pub verifier: SessionVerifier,
    pub config: Arc<SubmissionConfig>,
}

/// GET /api/application
pub async fn get_submission<R, B>(
    State(state): State<SubmissionAppState<R, B>>,
    token: SessionToken,
) -> SubmissionResult<Json<LookupResponse>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    let use_case = LookupSubmissionUseCase::new(state.repo.clone(), state.verifier.clone());

    let output = use_case.execute(token.into_inner()).await?;

    Ok(Json(output.into()))
}

/// POST /api/application
pub async fn create_submission<R, B>(
    State(state): State<SubmissionAppState<R, B>>,
    token: SessionToken,
    multipart: Multipart,
) -> SubmissionResult<(StatusCode, Json<SubmissionResponse>)>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    let form = SubmissionForm::from_multipart(multipart, state.config.max_document_bytes).await?;

    let use_case = CreateSubmissionUseCase::new(
        state.repo.clone(),
        state.blobs.clone(),
        state.verifier.clone(),
        state.config.clone(),
    );

    let submission = use_case
        .execute(CreateSubmissionInput {
            fields: form.fields,
            document: form.document,
            token: token.or(form.init_data),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SubmissionResponse::from(&submission))))
}

/// PUT /api/application
pub async fn update_submission<R, B>(
    State(state): State<SubmissionAppState<R, B>>,
    token: SessionToken,
    multipart: Multipart,
) -> SubmissionResult<Json<SubmissionResponse>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    let form = SubmissionForm::from_multipart(multipart, state.config.max_document_bytes).await?;

    let use_case = UpdateSubmissionUseCase::new(
        state.repo.clone(),
        state.blobs.clone(),
        state.verifier.clone(),
        state.config.clone(),
    );

    let submission = use_case
        .execute(UpdateSubmissionInput {
            fields: form.fields,
            document: form.document,
            token: token.or(form.init_data),
        })
        .await?;

    Ok(Json(SubmissionResponse::from(&submission)))
}
