use indexmap::IndexMap;

use crate::error::GenoptsError;
use crate::parser::{command_for, values};
use crate::registry::Registry;

/// Assemble the parser for `tags` and run it over `argv` (program name excluded).
pub fn parse_args<T: AsRef<str>>(
    registry: &Registry,
    tags: &[T],
    prog: &str,
    argv: &[String],
) -> Result<IndexMap<String, String>, GenoptsError> {
    let selection = registry.get(tags);
    let command = command_for(prog, &selection)?;

    log::debug!(
        "parsing {:?} with {} argument(s)",
        argv,
        command.get_arguments().count()
    );
    let matches = command
        .try_get_matches_from(std::iter::once(prog).chain(argv.iter().map(String::as_str)))?;

    Ok(values(&selection, &matches))
}
