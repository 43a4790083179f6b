//! Submission Router

use std::sync::Arc;

use auth::{AuthConfig, SessionVerifier};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;

use crate::application::config::SubmissionConfig;
use crate::domain::repository::{BlobStore, SubmissionRepository};
use crate::infra::ConfiguredBlobStore;
use crate::infra::postgres::PgSubmissionRepository;
use crate::presentation::handlers::{self, SubmissionAppState};

/// Create the submission router with the PostgreSQL repository
pub fn submission_router(
    repo: PgSubmissionRepository,
    blobs: ConfiguredBlobStore,
    auth_config: AuthConfig,
    config: SubmissionConfig,
) -> Router {
    submission_router_generic(repo, blobs, auth_config, config)
}

/// Create a generic submission router for any store implementations
pub fn submission_router_generic<R, B>(
    repo: R,
    blobs: B,
    auth_config: AuthConfig,
    config: SubmissionConfig,
) -> Router
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    let body_limit = config.request_body_limit();
    let state = SubmissionAppState {
        repo: Arc::new(repo),
        blobs: Arc::new(blobs),
        verifier: SessionVerifier::new(Arc::new(auth_config)),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_submission::<R, B>)
                .post(handlers::create_submission::<R, B>)
                .put(handlers::update_submission::<R, B>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
