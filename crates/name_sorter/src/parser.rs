use ::std::collections::BTreeSet;

use ::log::debug;

use crate::error::NameError;
use crate::name::FullName;

pub trait NameParser {
    /// Parses every raw line into a name, failing on the first invalid one.
    fn parse(&self, names: &BTreeSet<String>) -> Result<Vec<FullName>, NameError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NameParserService;

impl NameParser for NameParserService {
    fn parse(&self, names: &BTreeSet<String>) -> Result<Vec<FullName>, NameError> {
        let parsed = names
            .iter()
            .map(|line| FullName::create(Some(line.as_str())))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed {} names", parsed.len());
        Ok(parsed)
    }
}

/// Collapses raw lines into the set of unique lines.
pub fn unique_lines<I, S>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines.into_iter().map(Into::into).collect()
}
