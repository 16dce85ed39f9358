// GlslMangle
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/glslmangle
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line interface and startup configuration.
//!
//! Responsible for parsing command-line arguments and loading the shader
//! source and any user-supplied catalogue extension.
//!
//! Produces a [`CliConfig`] describing the transformation requested for
//! this run.

use std::{fs, io, path::PathBuf};

use clap::{Arg, ArgAction, Command};
use thiserror::Error;

use crate::{overload::CatalogError, *};

/// Errors that may occur during CLI parsing or the rewriting run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Catalogue error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result of command-line parsing.
#[derive(Debug)]
pub struct CliConfig {
    /// Shader source to rewrite.
    ///
    /// `None` when only the wrapper definitions are requested.
    pub source: Option<String>,

    /// Destination of the output. `None` writes to stdout.
    pub output: Option<PathBuf>,

    /// Prepends the generated wrapper definitions to the rewritten source.
    pub with_definitions: bool,

    /// Emits only the generated wrapper definitions.
    pub definitions_only: bool,

    /// Extra signature lines appended to the builtin catalogue.
    pub extra_signatures: Option<String>,
}

/// Parses command-line arguments and loads the referenced files.
///
/// - `FILE` argument: GLSL source to rewrite; stdin when omitted.
/// - `--builtins FILE`: additional catalogue lines, one signature per line.
pub fn parse_args() -> Result<CliConfig, CliError> {
    let matches = Command::new(APP_NAME)
        .author(APP_AUTHOR)
        .version(APP_SEMVER)
        .about(APP_ABOUT)
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Path to the GLSL source to rewrite")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the result to FILE instead of stdout")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("definitions")
                .short('d')
                .long("definitions")
                .help("Prepend the generated wrapper definitions to the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("definitions-only")
                .long("definitions-only")
                .help("Print only the generated wrapper definitions")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["file", "definitions"]),
        )
        .arg(
            Arg::new("builtins")
                .short('b')
                .long("builtins")
                .value_name("FILE")
                .help("Append extra builtin signature lines to the catalogue")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .after_help("Reads GLSL from stdin when no FILE is given")
        .get_matches();

    let definitions_only = matches.get_flag("definitions-only");

    let source = if definitions_only {
        None
    } else {
        Some(match matches.get_one::<PathBuf>("file") {
            Some(path) => {
                let source = fs::read_to_string(path)?;
                log::info!("Loaded {}", path.display());
                source
            }
            None => io::read_to_string(io::stdin())?,
        })
    };

    let extra_signatures = match matches.get_one::<PathBuf>("builtins") {
        Some(path) => {
            let lines = fs::read_to_string(path)?;
            log::info!("Loaded {}", path.display());
            Some(lines)
        }
        None => None,
    };

    Ok(CliConfig {
        source,
        output: matches.get_one::<PathBuf>("output").cloned(),
        with_definitions: matches.get_flag("definitions"),
        definitions_only,
        extra_signatures,
    })
}
