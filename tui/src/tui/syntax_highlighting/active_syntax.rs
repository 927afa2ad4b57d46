// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SyntaxDefinitions, TerminalBackend, TokenLookup, assign_color_pairs};

/// The syntax definition in use for the current file, with its colors registered and its
/// tokens ready for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSyntax {
    pub extensions: Vec<String>,
    pub token_lookup: TokenLookup,
}

impl ActiveSyntax {
    /// Pick the definition for `file_name` and register its colors with `backend`.
    /// Returns `None` (no highlighting) when no definition matches. Activating the same
    /// language twice registers the same ids with the same colors.
    pub fn activate(
        definitions: &SyntaxDefinitions,
        file_name: &str,
        backend: &mut dyn TerminalBackend,
    ) -> Option<Self> {
        let Some(definition) = definitions.find_for_file_name(file_name) else {
            tracing::debug!(message = "no syntax definition for file", file_name = file_name);
            return None;
        };

        let color_pairs = assign_color_pairs(definition);
        for pair in color_pairs.iter().flatten() {
            backend.register_color_pair(pair.id, pair.fg);
        }

        let token_lookup = TokenLookup::new(definition, &color_pairs);
        tracing::info!(
            message = "activated syntax definition",
            file_name = file_name,
            extensions = ?definition.extensions,
            tokens = token_lookup.len()
        );

        Some(Self {
            extensions: definition.extensions.clone(),
            token_lookup,
        })
    }
}
