//! Localized terms loader.

use std::path::Path;

use rpg_core::Terms;

use crate::loaders::{LoadResult, read_toml};

/// Loader for localized terms from TOML files.
///
/// Missing keys keep their English defaults.
pub struct TermsLoader;

impl TermsLoader {
    pub fn load(path: &Path) -> LoadResult<Terms> {
        read_toml(path, "terms")
    }
}
