// GlslMangle
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/glslmangle
// SPDX-License-Identifier: GPL-3.0-or-later

//! Redirection wrapper generation.
//!
//! Derives, from the signature catalogue, the uniquely named wrapper
//! functions standing in for overloaded builtins, together with the set
//! of names to redirect at call sites.

use std::collections::HashSet;

use super::catalog::{parse_catalog, CatalogError, Signature};
use super::rewriter;

/// Name prefix applied to every wrapper and rewritten call site.
pub const MANGLE_PREFIX: &str = "overloaded_";

/// Redirection wrappers and the builtin names they replace.
///
/// Built once at startup and read-only afterwards. Catalogue entries
/// sharing a name (true overloads) produce one wrapper each but a single
/// membership in the name set.
#[derive(Debug)]
pub struct RedirectionSet {
    /// Generated wrapper definitions, in catalogue order.
    wrappers: Vec<String>,

    /// Builtin names redirected at call sites.
    names: HashSet<String>,
}

impl RedirectionSet {
    /// Builds the set from catalogue text, plus extra names that must be
    /// redirected despite having no typed signature.
    pub fn from_catalog(catalog: &str, reserved: &[&str]) -> Result<Self, CatalogError> {
        let signatures = parse_catalog(catalog)?;

        let mut wrappers = Vec::with_capacity(signatures.len());
        let mut names = HashSet::new();
        for signature in &signatures {
            wrappers.push(wrapper_definition(signature));
            names.insert(signature.name.clone());
        }
        names.extend(reserved.iter().map(ToString::to_string));

        Ok(Self { wrappers, names })
    }

    /// Returns the concatenated wrapper source, one definition per line.
    ///
    /// Must be inserted textually before any rewritten code that calls
    /// builtins.
    pub fn definitions(&self) -> String {
        self.wrappers.join("\n")
    }

    /// Names replaced by [`RedirectionSet::rewrite_call_sites`].
    pub fn redirected_names(&self) -> &HashSet<String> {
        &self.names
    }

    /// Replaces every builtin call site in `source` with a call to the
    /// matching redirection wrapper. See [`rewriter::rewrite_call_sites`].
    pub fn rewrite_call_sites(&self, source: &str) -> String {
        rewriter::rewrite_call_sites(source, &self.names)
    }
}

/// Generates the wrapper definition for one signature.
///
/// The wrapper copies the declared parameter list verbatim and forwards
/// its arguments positionally in one call, so the compiler resolves the
/// inner call with its native overload rules while the outer name stays
/// unique.
fn wrapper_definition(signature: &Signature) -> String {
    let parameters = signature
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let arguments = signature
        .parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{} {}{} ({}) {{return {}({});}}",
        signature.return_type, MANGLE_PREFIX, signature.name, parameters, signature.name, arguments
    )
}
