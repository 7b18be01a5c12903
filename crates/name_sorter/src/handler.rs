use ::std::io::{self, Write};
use ::std::path::{Path, PathBuf};

use ::log::info;

use crate::error::{EnvironmentError, Result, SortNameError};
use crate::exit::ProgramExit;
use crate::file_manager::FileManager;
use crate::name::FullName;
use crate::parser::{NameParser, unique_lines};
use crate::sorter::NameSorter;

pub const OUTPUT_FILE_NAME: &str = "sorted-names-list.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortNameCommandRequest {
    pub file_path: PathBuf,
}

impl SortNameCommandRequest {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }
}

/// Runs one read, parse, sort, write and display cycle.
///
/// Environment problems (missing or empty input) are reported and turned into
/// [`ProgramExit::InvalidArguments`]. Name validation and I/O failures are
/// returned to the caller untouched.
pub struct SortNameCommandHandler<S, F, P> {
    sorter: S,
    file_manager: F,
    parser: P,
    output_file: PathBuf,
}

impl<S, F, P> SortNameCommandHandler<S, F, P>
where
    S: NameSorter,
    F: FileManager,
    P: NameParser,
{
    pub fn new(sorter: S, file_manager: F, parser: P) -> Self {
        Self {
            sorter,
            file_manager,
            parser,
            output_file: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }

    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Handles the request, displaying on stdout and reporting on stderr.
    pub fn handle(&self, request: &SortNameCommandRequest) -> Result<ProgramExit> {
        self.handle_with(request, &mut io::stdout().lock(), &mut io::stderr().lock())
    }

    pub fn handle_with<O, E>(
        &self,
        request: &SortNameCommandRequest,
        out: &mut O,
        err: &mut E,
    ) -> Result<ProgramExit>
    where
        O: Write,
        E: Write,
    {
        match self.sort_names(&request.file_path) {
            Ok(sorted) => {
                for name in &sorted {
                    writeln!(out, "{name}")?;
                }
                out.flush()?;
                Ok(ProgramExit::Success)
            },
            Err(SortNameError::Environment(exception)) => {
                info!("Stopping early: {exception}");
                writeln!(err, "{exception}")?;
                Ok(exception.exit_code())
            },
            Err(exception) => Err(exception),
        }
    }

    fn sort_names(&self, file_path: &Path) -> Result<Vec<FullName>> {
        if !self.file_manager.exists(file_path) {
            let missing = file_path.to_path_buf();
            return Err(EnvironmentError::FileNotFound(missing).into());
        }

        let lines = self.file_manager.read_all_lines(file_path)?;
        let line_count = lines.len();
        let unsorted_names = unique_lines(lines);
        info!(
            "Read {} lines ({} unique) from {}",
            line_count,
            unsorted_names.len(),
            file_path.display()
        );

        if unsorted_names.is_empty() {
            return Err(EnvironmentError::EmptyInput(file_path.to_path_buf()).into());
        }

        let parsed = self.parser.parse(&unsorted_names)?;
        let sorted = self.sorter.sort(&parsed);

        let rendered: Vec<String> = sorted.iter().map(ToString::to_string).collect();
        self.file_manager.write(&self.output_file, &rendered)?;
        info!("Wrote {} names to {}", rendered.len(), self.output_file.display());

        Ok(sorted)
    }
}
