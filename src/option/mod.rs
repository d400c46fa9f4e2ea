pub mod directives;

pub use directives::{Action, DefaultValue, Directives, ValueType};

use indexmap::IndexSet;

/// Anything that can take a flag declaration and turn it into a parser argument.
pub trait ArgSink {
    fn add_argument(&mut self, spellings: &[String], directives: &Directives);
}

/// A single command line flag: how it is spelled, how it parses, and which
/// pipeline stages ask for it.
///
/// Options are immutable once built. A registry hands them out behind an `Arc`
/// so the same declaration can appear under several tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOption {
    spellings: Vec<String>,
    directives: Directives,
    tags: IndexSet<String>,
}

impl CliOption {
    pub fn new<S>(spellings: impl IntoIterator<Item = S>, directives: Directives) -> Self
    where
        S: Into<String>,
    {
        Self {
            spellings: spellings.into_iter().map(Into::into).collect(),
            directives,
            tags: IndexSet::new(),
        }
    }

    pub fn with_tags<T>(mut self, tags: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn spellings(&self) -> &[String] {
        &self.spellings
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    pub fn is_wildcard(&self) -> bool {
        self.tags.is_empty()
    }

    /// Name the parsed value is stored under. See [`destination`].
    pub fn dest(&self) -> String {
        destination(&self.spellings, &self.directives)
    }

    /// Forward this declaration to `sink` exactly as it was declared.
    pub fn apply<A: ArgSink + ?Sized>(&self, sink: &mut A) {
        sink.add_argument(&self.spellings, &self.directives);
    }
}

/// Destination name for a declaration.
///
/// An explicit `dest` wins. Otherwise the first long spelling is used with its
/// leading dashes dropped and inner dashes turned into underscores, falling back
/// to the first short spelling. A positional keeps its name as written.
pub fn destination(spellings: &[String], directives: &Directives) -> String {
    if let Some(dest) = &directives.dest {
        return dest.clone();
    }

    let long = spellings
        .iter()
        .find_map(|s| s.strip_prefix("--").filter(|rest| !rest.is_empty()));
    let short = spellings
        .iter()
        .find_map(|s| s.strip_prefix('-').filter(|rest| !rest.is_empty()));

    match long.or(short) {
        Some(flag) => flag.replace('-', "_"),
        None => spellings.first().cloned().unwrap_or_default(),
    }
}
