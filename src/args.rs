use std::path::PathBuf;

use clap::Parser;

#[derive(clap::Args, Debug, Clone)]
pub struct SelectArgs {
    #[arg(
        short = 't',
        long = "tag",
        value_name = "TAG",
        value_delimiter = ',',
        help = "Stage tag to select; repeat or comma-separate for several"
    )]
    pub tags: Vec<String>,

    #[arg(
        short = 'm',
        long,
        value_name = "FILE",
        help = "Extra option manifest to declare (toml/yaml/json)"
    )]
    pub manifest: Vec<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        default_value = ".",
        help = "Project root that path defaults are resolved under"
    )]
    pub root: PathBuf,

    #[arg(long, help = "Do not declare the built-in code generator options")]
    pub no_builtin: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        long,
        value_name = "NAME",
        default_value = "codegen",
        help = "Program name used for the assembled parser"
    )]
    pub prog: String,

    #[arg(short = 'q', long, help = "Print only the table, without the summary line")]
    pub quiet: bool,
}

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inspect and try out the tagged options of a code generator"
)]
pub struct Args {
    #[command(flatten)]
    pub select: SelectArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(
        last = true,
        value_name = "ARGS",
        help = "Arguments to parse with the assembled parser"
    )]
    pub argv: Vec<String>,
}
