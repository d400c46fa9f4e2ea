use std::sync::Arc;

use indexmap::IndexMap;

use crate::option::{ArgSink, CliOption, Directives};

/// Tag under which untagged options are filed. Always part of a selection.
pub const WILDCARD: &str = "*";

/// Tag-indexed store of option declarations.
///
/// Filled once while the tool starts up and read-only afterwards, so a shared
/// reference (or an `Arc<Registry>`) can be handed to every stage that builds a
/// parser.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    by_tag: IndexMap<String, Vec<Arc<CliOption>>>,
    declared: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an option and file it in one step.
    pub fn declare<S, T>(
        &mut self,
        spellings: impl IntoIterator<Item = S>,
        directives: Directives,
        tags: impl IntoIterator<Item = T>,
    ) -> Arc<CliOption>
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.register(CliOption::new(spellings, directives).with_tags(tags))
    }

    /// File `option` under each of its tags, or under [`WILDCARD`] when it has none.
    pub fn register(&mut self, option: CliOption) -> Arc<CliOption> {
        let option = Arc::new(option);

        if option.is_wildcard() {
            self.push(WILDCARD, &option);
        } else {
            for tag in option.tags() {
                self.push(tag, &option);
            }
        }
        self.declared += 1;

        log::debug!(
            "registered {:?} under [{}]",
            option.spellings(),
            if option.is_wildcard() {
                WILDCARD.to_string()
            } else {
                option
                    .tags()
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        );

        option
    }

    fn push(&mut self, tag: &str, option: &Arc<CliOption>) {
        self.by_tag
            .entry(tag.to_string())
            .or_default()
            .push(Arc::clone(option));
    }

    /// Options filed under `tag`, in declaration order. Unknown tags are empty.
    pub fn tagged(&self, tag: &str) -> &[Arc<CliOption>] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tags seen so far, in the order they were first used.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }

    /// Number of declarations, counting a multi-tag option once.
    pub fn len(&self) -> usize {
        self.declared
    }

    pub fn is_empty(&self) -> bool {
        self.declared == 0
    }

    /// Options relevant to `tags`: the wildcard options first, then every
    /// requested tag's options in the order the tags were given.
    ///
    /// Nothing is deduplicated. Repeating a tag, or asking for two tags that
    /// share an option, yields that option once per match.
    pub fn get<T>(&self, tags: impl IntoIterator<Item = T>) -> Selection<'_>
    where
        T: AsRef<str>,
    {
        let tags = tags.into_iter().map(|t| t.as_ref().to_string()).collect();
        Selection {
            registry: self,
            tags,
        }
    }

    /// Apply every option selected by `tags` to `sink`, in selection order.
    pub fn apply_to<T, A>(&self, tags: impl IntoIterator<Item = T>, sink: &mut A)
    where
        T: AsRef<str>,
        A: ArgSink + ?Sized,
    {
        for option in &self.get(tags) {
            option.apply(sink);
        }
    }
}

/// A restartable view over the options chosen by [`Registry::get`].
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    registry: &'a Registry,
    tags: Vec<String>,
}

impl<'a> Selection<'a> {
    pub fn requested_tags(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Arc<CliOption>> + '_ {
        let registry = self.registry;
        registry.tagged(WILDCARD).iter().chain(
            self.tags
                .iter()
                .flat_map(move |tag| registry.tagged(tag).iter()),
        )
    }

    pub fn to_vec(&self) -> Vec<Arc<CliOption>> {
        self.iter().cloned().collect()
    }
}

impl<'s, 'a> IntoIterator for &'s Selection<'a> {
    type Item = &'a Arc<CliOption>;
    type IntoIter = Box<dyn Iterator<Item = &'a Arc<CliOption>> + 's>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
