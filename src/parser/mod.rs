pub mod errors;
pub mod values;

use std::collections::HashSet;
use std::sync::Arc;

use clap::{Arg, ArgAction, Command};

use crate::option::{Action, ArgSink, Directives, ValueType, destination};
use crate::registry::Selection;
use errors::BuildError;

pub use values::{parse_abspath, values};

enum Spelling {
    Long(String),
    Short(char),
    Positional,
}

fn classify(spelling: &str) -> Result<Spelling, &'static str> {
    if let Some(name) = spelling.strip_prefix("--") {
        if name.is_empty() || name.starts_with('-') {
            Err("long flags need a name after `--`")
        } else if name.contains(['=', ' ']) {
            Err("long flags cannot contain `=` or spaces")
        } else {
            Ok(Spelling::Long(name.to_string()))
        }
    } else if let Some(rest) = spelling.strip_prefix('-') {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c != '-' && !c.is_whitespace() => Ok(Spelling::Short(c)),
            _ => Err("short flags are a single character after `-`"),
        }
    } else if spelling.is_empty() || spelling.contains(' ') {
        Err("positional names cannot be empty or contain spaces")
    } else {
        Ok(Spelling::Positional)
    }
}

/// [`ArgSink`] that builds a `clap::Command`.
///
/// Bad or clashing declarations are not added; they are kept as errors and
/// reported by [`ClapSink::finish`] so a broken declaration never reaches clap's
/// own build-time assertions.
#[derive(Debug)]
pub struct ClapSink {
    command: Command,
    ids: HashSet<String>,
    longs: HashSet<String>,
    shorts: HashSet<char>,
    optional_positional: bool,
    errors: Vec<BuildError>,
}

impl ClapSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_command(Command::new(name.into()))
    }

    /// Start from an existing command.
    ///
    /// Its arguments, their aliases and the auto-generated `-h/--help` are
    /// reserved, so declarations clashing with them are reported.
    pub fn from_command(command: Command) -> Self {
        let mut ids = HashSet::from(["help".to_string()]);
        let mut longs = HashSet::from(["help".to_string()]);
        let mut shorts = HashSet::from(['h']);
        let mut optional_positional = false;

        for arg in command.get_arguments() {
            ids.insert(arg.get_id().as_str().to_string());
            longs.extend(arg.get_long().map(str::to_string));
            longs.extend(
                arg.get_all_aliases()
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string),
            );
            shorts.extend(arg.get_short());
            shorts.extend(arg.get_all_short_aliases().unwrap_or_default());
            if arg.is_positional() && !arg.is_required_set() {
                optional_positional = true;
            }
        }

        Self {
            command,
            ids,
            longs,
            shorts,
            optional_positional,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[BuildError] {
        &self.errors
    }

    pub fn finish(self) -> Result<Command, BuildError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.command),
        }
    }

    fn build_arg(
        &mut self,
        spellings: &[String],
        directives: &Directives,
    ) -> Result<Arg, BuildError> {
        let invalid = |spelling: &str, reason: &str| BuildError::InvalidSpelling {
            option: spellings.to_vec(),
            spelling: spelling.to_string(),
            reason: reason.to_string(),
        };

        if spellings.is_empty() {
            return Err(invalid("", "an option needs at least one spelling"));
        }

        let mut longs = Vec::new();
        let mut shorts = Vec::new();
        let mut positional = false;
        for spelling in spellings {
            match classify(spelling).map_err(|reason| invalid(spelling.as_str(), reason))? {
                Spelling::Long(name) => longs.push(name),
                Spelling::Short(c) => shorts.push(c),
                Spelling::Positional => positional = true,
            }
        }

        if positional {
            if spellings.len() > 1 {
                return Err(invalid(
                    spellings[1].as_str(),
                    "a positional argument takes a single name",
                ));
            }
            if directives.action == Action::StoreTrue {
                return Err(invalid(
                    spellings[0].as_str(),
                    "a positional argument must store a value",
                ));
            }
        }

        if positional && directives.required && self.optional_positional {
            return Err(BuildError::Unsupported {
                option: spellings.to_vec(),
                reason: "a required positional cannot follow an optional one".to_string(),
            });
        }

        if directives.required && directives.default.is_some() {
            return Err(BuildError::Unsupported {
                option: spellings.to_vec(),
                reason: "a required option cannot have a default".to_string(),
            });
        }

        let id = destination(spellings, directives);
        if self.ids.contains(&id) {
            return Err(BuildError::Conflict {
                kind: "destination",
                name: id,
            });
        }
        let mut own_longs = HashSet::new();
        if let Some(long) = longs
            .iter()
            .find(|l| self.longs.contains(*l) || !own_longs.insert(*l))
        {
            return Err(BuildError::Conflict {
                kind: "long flag",
                name: format!("--{long}"),
            });
        }
        let mut own_shorts = HashSet::new();
        if let Some(short) = shorts
            .iter()
            .find(|s| self.shorts.contains(*s) || !own_shorts.insert(**s))
        {
            return Err(BuildError::Conflict {
                kind: "short flag",
                name: format!("-{short}"),
            });
        }

        self.ids.insert(id.clone());
        self.longs.extend(longs.iter().cloned());
        self.shorts.extend(shorts.iter().copied());
        if positional && !directives.required {
            self.optional_positional = true;
        }

        let mut arg = Arg::new(id);
        if let Some((first, rest)) = longs.split_first() {
            arg = arg.long(first.clone()).visible_aliases(rest.to_vec());
        }
        if let Some((first, rest)) = shorts.split_first() {
            arg = arg.short(*first).visible_short_aliases(rest.to_vec());
        }

        arg = match directives.action {
            Action::StoreTrue => arg.action(ArgAction::SetTrue),
            Action::Store => match directives.value_type {
                ValueType::Text => arg.action(ArgAction::Set),
                ValueType::AbsPath => arg.action(ArgAction::Set).value_parser(parse_abspath),
            },
        };

        if let Some(default) = &directives.default {
            arg = arg.default_value(default.to_os_string());
        }
        if directives.required {
            arg = arg.required(true);
        }
        if let Some(help) = &directives.help {
            arg = arg.help(help.clone());
        }

        Ok(arg)
    }
}

impl ArgSink for ClapSink {
    fn add_argument(&mut self, spellings: &[String], directives: &Directives) {
        match self.build_arg(spellings, directives) {
            Ok(arg) => {
                let command = std::mem::replace(&mut self.command, Command::new("genopts"));
                self.command = command.arg(arg);
            }
            Err(err) => {
                log::warn!("not adding {:?}: {}", spellings, err);
                self.errors.push(err);
            }
        }
    }
}

/// Build a command named `name` holding every option in `selection`.
///
/// An option that shows up more than once in the selection is added once.
pub fn command_for(
    name: impl Into<String>,
    selection: &Selection<'_>,
) -> Result<Command, BuildError> {
    let mut sink = ClapSink::new(name);
    let mut seen = Vec::new();
    for option in selection {
        if seen.iter().any(|o| Arc::ptr_eq(o, option)) {
            continue;
        }
        seen.push(Arc::clone(option));
        option.apply(&mut sink);
    }
    sink.finish()
}
