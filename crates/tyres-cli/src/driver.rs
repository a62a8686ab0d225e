use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};
use tyres::{
    AnnotationNode, Dialect, ResolverConfig, TypeDeclarationMap, TypeResolutionStatus,
    TypeResolver,
};

use crate::args::CliArgs;
use crate::config::{TyresConfig, load_config};

/// One line of output.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Resolved {
        name: String,
        nullable: bool,
        status: TypeResolutionStatus,
        shape: String,
    },
    Unwrapped {
        name: String,
        shape: String,
    },
    Failed {
        name: String,
        error: String,
    },
}

impl Report {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Default)]
pub struct RunOutcome {
    pub reports: Vec<Report>,
    pub failures: usize,
}

/// Load the program and config named by `args` and resolve the requested
/// names.
pub fn run(args: &CliArgs) -> Result<RunOutcome> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => TyresConfig::default(),
    };
    let dialect = match args.dialect {
        Some(arg) => Dialect::from(arg),
        None => config.dialect.unwrap_or_default(),
    };

    let types = load_program(&args.program, dialect)?;
    let names: Vec<&str> = if args.types.is_empty() {
        types.sorted_names()
    } else {
        args.types.iter().map(String::as_str).collect()
    };
    info!(%dialect, declared = types.len(), requested = names.len(), "resolving");

    let reports = resolve_names(&types, &names, dialect, config.resolver, args.unwrap);
    let failures = reports.iter().filter(|report| report.is_failure()).count();
    Ok(RunOutcome { reports, failures })
}

/// Read an ESTree `Program` JSON file and collect its type declarations.
pub fn load_program(path: &Path, dialect: Dialect) -> Result<TypeDeclarationMap> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read program: {}", path.display()))?;
    let program: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse program JSON: {}", path.display()))?;
    let types = TypeDeclarationMap::from_program(&program, dialect)
        .with_context(|| format!("unexpected ESTree shape in {}", path.display()))?;
    Ok(types)
}

/// Resolve each name as a reference into `types`.
pub fn resolve_names(
    types: &TypeDeclarationMap,
    names: &[&str],
    dialect: Dialect,
    config: ResolverConfig,
    unwrap: bool,
) -> Vec<Report> {
    let resolver = TypeResolver::new(dialect).with_config(config);

    names
        .iter()
        .map(|&name| {
            if !types.contains(name) {
                warn!(name, "requested type is not declared in the program");
            }
            let reference = AnnotationNode::reference(name);
            let outcome = if unwrap {
                resolver
                    .unwrap_alias_value(&reference, types)
                    .map(|node| Report::Unwrapped {
                        name: name.to_string(),
                        shape: node.shape().to_string(),
                    })
            } else {
                resolver
                    .resolve(Some(&reference), types)
                    .map(|resolved| Report::Resolved {
                        name: name.to_string(),
                        nullable: resolved.nullable,
                        status: resolved.status,
                        shape: resolved.annotation.shape().to_string(),
                    })
            };
            outcome.unwrap_or_else(|err| Report::Failed {
                name: name.to_string(),
                error: err.to_string(),
            })
        })
        .collect()
}

/// Write one JSON document per report.
pub fn write_reports(out: &mut impl Write, reports: &[Report], pretty: bool) -> Result<()> {
    for report in reports {
        if pretty {
            serde_json::to_writer_pretty(&mut *out, report)?;
        } else {
            serde_json::to_writer(&mut *out, report)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
