//! Module/import resolution: turning an `import "./util"` path into a
//! source buffer to add to the driver's parse set.

use std::path::{Path, PathBuf};

use zomlc_util::define_idx;
use zomlc_util::index_vec::IndexVec;
use zomlc_util::span::BufferId;

define_idx!(ModuleId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// A module compiled as a standalone binary entry point.
    Executable,
    /// A module that only contributes declarations to its importers.
    Library,
}

/// Where a module currently stands in the driver's pipeline. This crate only
/// drives modules through `Discovered` and `Parsed`; later phases
/// (type-checked, code-generated) are reserved names for a future backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulePhase {
    Discovered,
    Loaded,
    Parsed,
}

#[derive(Debug, Clone)]
pub struct ModuleFile {
    pub filename: PathBuf,
    pub buffer_id: BufferId,
}

#[derive(Debug, Clone)]
pub struct Module {
    pub kind: ModuleKind,
    pub name: String,
    pub source_files: Vec<ModuleFile>,
    pub dependencies: Vec<ModuleId>,
    pub phase: ModulePhase,
}

impl Module {
    pub fn new(kind: ModuleKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            source_files: Vec::new(),
            dependencies: Vec::new(),
            phase: ModulePhase::Discovered,
        }
    }
}

/// A directory `ModuleLoader` searches when an import can't be resolved
/// relative to the importing file. `is_system` mirrors `-isystem` vs `-I`:
/// system paths are searched after local ones and never trigger
/// "unused import" style diagnostics meant for project-local code.
#[derive(Debug, Clone)]
pub struct SearchPath {
    pub path: PathBuf,
    pub is_system: bool,
}

/// Resolves `import` module paths against a file's own directory and a list
/// of configured search paths, same precedence order as `#include`-style
/// resolution: relative to the importing file first, then each search path
/// in the order it was added.
#[derive(Debug, Clone, Default)]
pub struct ModuleLoader {
    search_paths: Vec<SearchPath>,
}

impl ModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_search_path(&mut self, path: impl Into<PathBuf>, is_system: bool) {
        self.search_paths.push(SearchPath {
            path: path.into(),
            is_system,
        });
    }

    pub fn search_paths(&self) -> &[SearchPath] {
        &self.search_paths
    }

    /// Resolve a module path string (as written in an `import` declaration)
    /// to a file on disk, trying the importing file's own directory first.
    ///
    /// A bare module path is tried both as-is and with a `.zom` extension
    /// appended, since ZomLang import paths are written without an
    /// extension by convention (`import { helper } from "./util"` resolves
    /// `./util.zom`).
    pub fn resolve(&self, importing_file: &Path, module_path: &str) -> Option<PathBuf> {
        let importing_dir = importing_file.parent().unwrap_or_else(|| Path::new("."));
        let mut roots = Vec::with_capacity(self.search_paths.len() + 1);
        roots.push(importing_dir.to_path_buf());
        roots.extend(self.search_paths.iter().map(|sp| sp.path.clone()));

        for root in roots {
            let direct = root.join(module_path);
            if direct.is_file() {
                return Some(direct);
            }
            let with_ext = root.join(format!("{module_path}.zom"));
            if with_ext.is_file() {
                return Some(with_ext);
            }
        }
        None
    }
}
