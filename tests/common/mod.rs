#![allow(dead_code)]

use std::fs;
use std::sync::Arc;

use genopts::{ArgSink, CliOption, Directives, Selection};

pub const NO_TAGS: [&str; 0] = [];

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

pub fn write_manifest_file(file_name: &str, contents: &str) -> String {
    ensure_out_dir();
    let path = format!("out/{}", file_name);
    fs::write(&path, contents).expect("write manifest file");
    path
}

/// First spelling of every option in the selection, in order.
pub fn flags(selection: &Selection<'_>) -> Vec<String> {
    selection
        .iter()
        .map(|o| o.spellings()[0].clone())
        .collect()
}

pub fn same_options(left: &[Arc<CliOption>], right: &[&Arc<CliOption>]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| Arc::ptr_eq(l, r))
}

/// Sink that only remembers what it was given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<(Vec<String>, Directives)>,
}

impl ArgSink for RecordingSink {
    fn add_argument(&mut self, spellings: &[String], directives: &Directives) {
        self.calls.push((spellings.to_vec(), directives.clone()));
    }
}
