//! Domain Value Objects
//!
//! Validated applicant fields and the uploaded document.

use std::fmt;
use std::str::FromStr;

use crate::error::{SubmissionError, SubmissionResult};

/// Degree program applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Bachelors,
    Masters,
    Phd,
}

impl Program {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Program::Bachelors => "bachelors",
            Program::Masters => "masters",
            Program::Phd => "phd",
        }
    }
}

impl FromStr for Program {
    type Err = SubmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bachelors" => Ok(Program::Bachelors),
            "masters" => Ok(Program::Masters),
            "phd" => Ok(Program::Phd),
            _ => Err(SubmissionError::InvalidField("program")),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applicant fields as received, before validation
#[derive(Debug, Clone, Default)]
pub struct RawApplicantFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
}

/// Validated, mutable applicant fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantFields {
    pub first_name: String,
    pub last_name: String,
    pub university: String,
    pub program: Program,
}

impl ApplicantFields {
    /// Trim every field; a field that is blank after trimming is missing
    pub fn validate(raw: RawApplicantFields) -> SubmissionResult<Self> {
        let first_name = required(raw.first_name, "firstName")?;
        let last_name = required(raw.last_name, "lastName")?;
        let university = required(raw.university, "university")?;
        let program = required(raw.program, "program")?.parse()?;

        Ok(Self {
            first_name,
            last_name,
            university,
            program,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> SubmissionResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(SubmissionError::MissingFields(field))
}

/// Uploaded archive
#[derive(Clone, Default)]
pub struct DocumentUpload {
    /// Client-supplied file name, untrusted
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for DocumentUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
