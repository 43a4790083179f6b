//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_objects::{ApplicantFields, Program};
use crate::error::{SubmissionError, SubmissionResult};

/// PostgreSQL-backed submission store
///
/// The `submissions.identity_key` column is `UNIQUE`; a violation on insert
/// arrives as a unique-violation database error and becomes
/// `DuplicateSubmission`.
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubmissionRepository for PgSubmissionRepository {
    async fn find_by_identity(&self, identity_key: i64) -> SubmissionResult<Option<Submission>> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT
                submission_id,
                identity_key,
                first_name,
                last_name,
                university,
                program,
                document_path,
                created_at,
                updated_at
            FROM submissions
            WHERE identity_key = $1
            "#,
        )
        .bind(identity_key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SubmissionRow::into_submission).transpose()
    }

    async fn insert(&self, submission: &Submission) -> SubmissionResult<SubmissionId> {
        sqlx::query(
            r#"
            INSERT INTO submissions (
                submission_id,
                identity_key,
                first_name,
                last_name,
                university,
                program,
                document_path,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(submission.id.into_uuid())
        .bind(submission.identity_key)
        .bind(&submission.fields.first_name)
        .bind(&submission.fields.last_name)
        .bind(&submission.fields.university)
        .bind(submission.fields.program.as_str())
        .bind(&submission.document_path)
        .bind(submission.created_at)
        .bind(submission.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(submission_id = %submission.id, "Submission row inserted");

        Ok(submission.id)
    }

    async fn update_by_identity(
        &self,
        identity_key: i64,
        submission: &Submission,
    ) -> SubmissionResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE submissions
            SET first_name = $2,
                last_name = $3,
                university = $4,
                program = $5,
                document_path = $6,
                updated_at = $7
            WHERE identity_key = $1
            "#,
        )
        .bind(identity_key)
        .bind(&submission.fields.first_name)
        .bind(&submission.fields.last_name)
        .bind(&submission.fields.university)
        .bind(submission.fields.program.as_str())
        .bind(&submission.document_path)
        .bind(submission.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(identity_key, "Keyed update matched no submission");
            return Err(SubmissionError::NotFound);
        }

        Ok(())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SubmissionRow {
    submission_id: Uuid,
    identity_key: Option<i64>,
    first_name: String,
    last_name: String,
    university: String,
    program: String,
    document_path: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SubmissionRow {
    fn into_submission(self) -> SubmissionResult<Submission> {
        let program: Program = self.program.parse().map_err(|_| {
            SubmissionError::PersistenceFailure(format!(
                "stored program value {:?} is not recognised",
                self.program
            ))
        })?;

        Ok(Submission {
            id: SubmissionId::from_uuid(self.submission_id),
            identity_key: self.identity_key,
            fields: ApplicantFields {
                first_name: self.first_name,
                last_name: self.last_name,
                university: self.university,
                program,
            },
            document_path: self.document_path,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
