//! Tracing setup for the `tyres` binary.
//!
//! `TYRES_LOG` accepts ordinary `RUST_LOG` directives plus shorthands for the
//! targets worth watching while debugging a resolution:
//!
//! | Shorthand | Expands to              | Shows                                   |
//! |-----------|-------------------------|-----------------------------------------|
//! | `hops`    | `tyres_resolver=trace`  | every declaration followed, per name    |
//! | `reader`  | `tyres_ast=trace`       | skipped statements, replaced duplicates |
//! | `cli`     | `tyres_cli=info`        | dialect and declaration counts          |
//!
//! Shorthands and directives mix freely. An empty `TYRES_LOG` means `cli`.
//!
//! ```bash
//! # Each hop of one resolution, nested under its span
//! TYRES_LOG=hops TYRES_LOG_FORMAT=tree tyres program.json --type Props
//!
//! # Reader and resolver as JSON
//! TYRES_LOG=hops,reader TYRES_LOG_FORMAT=json tyres program.json
//! ```
//!
//! `TYRES_LOG_FORMAT` is `text` (default), `tree` or `json`. Nothing is
//! installed unless `TYRES_LOG` or `RUST_LOG` is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Directives used for an empty `TYRES_LOG`.
pub const DEFAULT_DIRECTIVES: &str = "tyres_cli=info";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `TYRES_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Replace the shorthands in a `TYRES_LOG` value with filter directives.
pub fn expand_directives(value: &str) -> String {
    let directives: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(|directive| match directive {
            "hops" => "tyres_resolver=trace",
            "reader" => "tyres_ast=trace",
            "cli" => DEFAULT_DIRECTIVES,
            other => other,
        })
        .collect();
    if directives.is_empty() {
        DEFAULT_DIRECTIVES.to_string()
    } else {
        directives.join(",")
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Settings from raw variable values, or `None` when logging is off.
    ///
    /// `TYRES_LOG` wins over `RUST_LOG`; only `TYRES_LOG` understands
    /// shorthands.
    pub fn from_values(
        tyres_log: Option<&str>,
        rust_log: Option<&str>,
        format: Option<&str>,
    ) -> Option<Self> {
        let directives = match (tyres_log, rust_log) {
            (Some(value), _) => expand_directives(value),
            (None, Some(value)) => value.to_string(),
            (None, None) => return None,
        };
        Some(Self {
            directives,
            format: LogFormat::parse(format.unwrap_or_default()),
        })
    }

    pub fn from_env() -> Option<Self> {
        let tyres_log = std::env::var("TYRES_LOG").ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let format = std::env::var("TYRES_LOG_FORMAT").ok();
        Self::from_values(
            tyres_log.as_deref(),
            rust_log.as_deref(),
            format.as_deref(),
        )
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

/// Initialise the global tracing subscriber from the environment.
///
/// All output goes to stderr so it never mixes with the JSON reports on
/// stdout.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = settings.filter();

    match settings.format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_verbose_exit(false);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
