use ::std::path::PathBuf;

use ::thiserror::Error;

use crate::exit::ProgramExit;

/// Input-integrity failures raised while turning a raw line into a name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Full name cannot be null")]
    NullInput,

    #[error("Full name cannot be empty")]
    EmptyInput,

    #[error("A name must contain at least one given name and a last name: {0:?}")]
    MissingNamePart(String),

    #[error("A name must have at least 1 and at most 3 given names: {0:?}")]
    TooManyGivenNames(String),
}

/// Conditions of the environment that stop a run before any parsing happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Input file contains no names: {}", .0.display())]
    EmptyInput(PathBuf),
}

impl EnvironmentError {
    /// Both conditions share one code; `FileNotFound` stays reserved.
    pub fn exit_code(&self) -> ProgramExit {
        match self {
            Self::FileNotFound(_) | Self::EmptyInput(_) => {
                ProgramExit::InvalidArguments
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum SortNameError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    InputIntegrity(#[from] NameError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SortNameError {
    /// The exit code the binary reports when this error ends a run.
    /// I/O failures have none and abort the process.
    pub fn exit_code(&self) -> Option<ProgramExit> {
        match self {
            Self::Environment(exception) => Some(exception.exit_code()),
            Self::InputIntegrity(_) => Some(ProgramExit::ProcessingError),
            Self::Io(_) => None,
        }
    }
}

pub type Result<T, E = SortNameError> = std::result::Result<T, E>;
