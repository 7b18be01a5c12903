pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod file_manager;
pub mod handler;
pub mod interactive;
pub mod name;
pub mod parser;
pub mod sorter;

// Re-export main types for convenience
pub use cli::Args;
pub use config::Settings;
pub use error::{EnvironmentError, NameError, SortNameError};
pub use exit::ProgramExit;
pub use file_manager::{FileManager, LocalFileManager};
pub use handler::{OUTPUT_FILE_NAME, SortNameCommandHandler, SortNameCommandRequest};
pub use interactive::{InteractiveMode, PromptCommand};
pub use name::FullName;
pub use parser::{NameParser, NameParserService};
pub use sorter::{NameSorter, NameSorterService};
