// GlslMangle
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/glslmangle
// SPDX-License-Identifier: GPL-3.0-or-later

mod cli;
mod overload;

use std::{fs, process::ExitCode};

use cli::{CliConfig, CliError};
use overload::RedirectionSet;

pub const APP_NAME: &str = "glslmangle";
pub const APP_ABOUT: &str = "GLSL builtin overload mangling utility";
pub const APP_AUTHOR: &str = "Harlen Batagelo, hbatagelo@gmail.com";
pub const APP_SEMVER: &str = "0.1.0";

fn main() -> ExitCode {
    simple_logger::SimpleLogger::new()
        .with_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init()
        .unwrap();

    let config = match cli::parse_args() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the redirection set once and applies the requested
/// transformation. The set is read-only after this point; rewriting is a
/// pure function of the source text and the set.
fn run(config: &CliConfig) -> Result<(), CliError> {
    let redirections = match &config.extra_signatures {
        Some(extra) => overload::builtin_redirections_with(extra)?,
        None => overload::builtin_redirections()?,
    };
    log::debug!(
        "Redirecting {} builtin names",
        redirections.redirected_names().len()
    );

    let output = render_output(config, &redirections);

    match &config.output {
        Some(path) => fs::write(path, output)?,
        None => print!("{output}"),
    }

    Ok(())
}

fn render_output(config: &CliConfig, redirections: &RedirectionSet) -> String {
    if config.definitions_only {
        let mut definitions = redirections.definitions();
        definitions.push('\n');
        return definitions;
    }

    let source = config.source.as_deref().unwrap_or_default();
    let rewritten = redirections.rewrite_call_sites(source);
    if config.with_definitions {
        format!("{}\n{}", redirections.definitions(), rewritten)
    } else {
        rewritten
    }
}
