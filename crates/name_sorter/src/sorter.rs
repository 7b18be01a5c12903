use ::std::cmp::Ordering;

use crate::name::FullName;

pub trait NameSorter {
    fn sort(&self, names: &[FullName]) -> Vec<FullName>;
}

/// Orders names by last name, then by given names, ignoring case.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameSorterService;

impl NameSorter for NameSorterService {
    fn sort(&self, names: &[FullName]) -> Vec<FullName> {
        let mut sorted = names.to_vec();
        sorted.sort_by(compare_names);
        sorted
    }
}

pub fn compare_names(a: &FullName, b: &FullName) -> Ordering {
    compare_ignore_case(a.last_name(), b.last_name())
        .then_with(|| compare_ignore_case(&a.given_name(), &b.given_name()))
}

/// Ordinal comparison after upper-casing each char. Not locale aware.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}

/// Simple upper-case mapping: a char whose upper case spans several chars
/// (`ß` -> `SS`) is left as it is, so each char folds to exactly one char.
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
