use ::std::fmt;
use ::std::process::ExitCode;

/// Process exit codes exposed to the hosting shell.
///
/// `NoArguments` and `FileNotFound` are part of the external contract even
/// though the current flow never produces them: a missing input file is
/// reported as `InvalidArguments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ProgramExit {
    /// Names were sorted, written and displayed.
    Success = 0,
    /// The prompt input was not a recognised command.
    InvalidCommandLine = 1,
    /// Reserved.
    NoArguments = 2,
    /// The input file is missing or holds no lines.
    InvalidArguments = 3,
    /// Reserved.
    FileNotFound = 4,
    /// A line failed name validation.
    ProcessingError = 5,
}

impl ProgramExit {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<ProgramExit> for ExitCode {
    fn from(exit: ProgramExit) -> Self {
        ExitCode::from(exit.code())
    }
}

impl fmt::Display for ProgramExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
