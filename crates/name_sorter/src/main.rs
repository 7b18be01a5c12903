use ::std::fs;
use ::std::io;
use ::std::path::Path;
use ::std::process::ExitCode;

use ::anyhow::{Context, Result};
use ::log::{LevelFilter, debug, error, info};
use ::simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use ::name_sorter::{
    Args, InteractiveMode, LocalFileManager, NameParserService, NameSorterService,
    ProgramExit, PromptCommand, Settings, SortNameCommandHandler,
    SortNameCommandRequest, SortNameError,
};

fn main() -> Result<ExitCode> {
    let args = Args::parse_args();

    let settings = Settings::load(&args.config)?.with_args(&args);

    init_logging(args.log_level(), settings.log_file.as_deref())?;
    info!("Starting name sorter (v{})", env!("CARGO_PKG_VERSION"));
    debug!("Loaded configuration: {:?}", settings);

    let exit = run(&args, &settings)?;
    info!("Finished with exit code {exit}");

    Ok(exit.into())
}

fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    // Stdout carries the sorted names, so terminal logs go to stderr only.
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        let file = fs::File::create(path)
            .context(format!("Failed to create log file at {}", path.display()))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    CombinedLogger::init(loggers).context("Failed to initialize logging")
}

fn run(args: &Args, settings: &Settings) -> Result<ProgramExit> {
    let request = match &args.input {
        Some(path) => SortNameCommandRequest::new(path.clone()),
        None => {
            let command = InteractiveMode::read_command(
                &mut io::stdin().lock(),
                &mut io::stdout(),
                &mut io::stderr(),
            )
            .context("Failed to read command")?;

            match command {
                Some(PromptCommand::SortNames(path)) => {
                    SortNameCommandRequest::new(path)
                },
                Some(PromptCommand::Exit) => return Ok(ProgramExit::Success),
                None => return Ok(ProgramExit::InvalidCommandLine),
            }
        },
    };

    let handler = SortNameCommandHandler::new(
        NameSorterService,
        LocalFileManager,
        NameParserService,
    )
    .with_output_file(settings.output_file.clone());

    match handler.handle(&request) {
        Ok(exit) => Ok(exit),
        Err(SortNameError::Io(exception)) => Err(exception).context(format!(
            "Failed to sort names from {}",
            request.file_path.display()
        )),
        Err(exception) => {
            error!("Processing error: {exception}");
            Ok(exception.exit_code().unwrap_or(ProgramExit::ProcessingError))
        },
    }
}
