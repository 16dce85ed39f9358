// GlslMangle
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/glslmangle
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builtin call-site rewriting.

use regex::Regex;
use std::collections::HashSet;

use super::redirection::MANGLE_PREFIX;

/// Replaces every occurrence of `<name>(` whose name is a member of
/// `names` with `overloaded_<name>(`, leaving all other text unchanged.
///
/// Matching is lexical, not syntactic: a maximal ASCII identifier run
/// immediately followed by an open parenthesis counts as a call site,
/// including inside comments or macro bodies. Rewriting its own output a
/// second time is a no-op, since mangled names are not members of `names`.
pub fn rewrite_call_sites(source: &str, names: &HashSet<String>) -> String {
    let call_site = Regex::new(r"[a-zA-Z_][a-zA-Z_0-9]*\(").unwrap();

    call_site
        .replace_all(source, |caps: &regex::Captures| {
            let call = &caps[0];
            let name = &call[..call.len() - 1];
            if names.contains(name) {
                format!("{MANGLE_PREFIX}{call}")
            } else {
                call.to_string()
            }
        })
        .to_string()
}
