use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tyres::Dialect;

/// CLI arguments for the tyres binary.
#[derive(Parser, Debug)]
#[command(
    name = "tyres",
    version,
    about = "Resolve type references in Flow and TypeScript declarations"
)]
pub struct CliArgs {
    /// ESTree `Program` JSON produced by flow-parser or typescript-estree.
    pub program: PathBuf,

    /// Source dialect of the program. Overrides the config file.
    #[arg(short = 'd', long, value_enum, ignore_case = true)]
    pub dialect: Option<DialectArg>,

    /// Declared type to resolve; repeatable. Defaults to every declared type.
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub types: Vec<String>,

    /// Path to a tyres.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Only follow alias values; report the unwrapped node instead of the
    /// full resolution.
    #[arg(long)]
    pub unwrap: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DialectArg {
    Flow,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Flow => Dialect::Flow,
            DialectArg::TypeScript => Dialect::TypeScript,
        }
    }
}
