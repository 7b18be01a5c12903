use ::std::path::PathBuf;

use ::clap::Parser;
use ::log::LevelFilter;

pub const DEFAULT_CONFIG_FILE: &str = "name-sorter.yaml";

#[derive(Parser, Debug)]
#[command(
    name = "name-sorter",
    version,
    about = "Sorts a list of names by last name, then by given names",
    long_about = concat!(
        "Reads a text file with one full name per line (1 to 3 given names ",
        "followed by a last name), sorts the names by last name and then by ",
        "given names ignoring case, writes the result to sorted-names-list.txt ",
        "and prints it. Without an input file the program prompts for a ",
        "`name-sorter <input-file-path>` command."
    )
)]
pub struct Args {
    /// Input file with one name per line (prompts for a command if omitted)
    pub input: Option<PathBuf>,

    /// Where to write the sorted names (overrides the configuration file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose logging (use -v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
