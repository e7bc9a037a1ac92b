//! `CompilerDriver`: owns a `SourceManager`/`DiagnosticEngine` pair and
//! drives every added buffer through `zomlc_syntax::Parser`, resolving
//! `import` declarations against a `ModuleLoader` as it goes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use zomlc_util::diagnostic::{DiagID, DiagnosticEngine};
use zomlc_util::span::{BufferId, SourceManager, SourceRange};
use zomlc_util::{FxHashMap, FxHashSet};

use zomlc_syntax::ast::{self, ImplementationModuleElement};
use zomlc_syntax::Parser;

use crate::error::DriverResult;
use crate::module::{Module, ModuleFile, ModuleId, ModuleKind, ModuleLoader, ModulePhase};
use crate::options::LangOptions;

/// Strip a leading UTF-8 BOM (`EF BB BF`), if present, before a buffer is
/// registered with the `SourceManager`. Text editors on some platforms
/// still prepend one; left in place it would otherwise lex as part of the
/// file's first token.
fn strip_utf8_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    }
}

/// Lex and parse a single buffer. `lang_options` is accepted for parity with
/// the original `basic/frontend.h` entry point and for forward
/// compatibility; the parser and lexer built in this workspace already
/// implement exactly `LangOptions::default()`'s behavior unconditionally.
pub fn perform_parse(
    source_manager: &SourceManager,
    diagnostic_engine: &DiagnosticEngine,
    _lang_options: &LangOptions,
    buffer_id: BufferId,
) -> Option<ast::SourceFile> {
    let source = source_manager.buffer_contents(buffer_id)?;
    let mut parser = Parser::new(source, buffer_id, diagnostic_engine);
    Some(parser.parse_source_file())
}

/// One resolved `import` edge discovered while parsing: `from` imported
/// `to` via the declaration at `range`.
struct ImportEdge {
    from: BufferId,
    to: BufferId,
    range: SourceRange,
}

pub struct CompilerDriver {
    lang_options: LangOptions,
    source_manager: SourceManager,
    diagnostics: DiagnosticEngine,
    module_loader: ModuleLoader,
    buffer_paths: FxHashMap<BufferId, PathBuf>,
    root_buffers: Vec<BufferId>,
    parsed: HashMap<BufferId, ast::SourceFile>,
    modules: zomlc_util::index_vec::IndexVec<ModuleId, Module>,
}

impl CompilerDriver {
    pub fn new(lang_options: LangOptions) -> Self {
        Self {
            lang_options,
            source_manager: SourceManager::new(),
            diagnostics: DiagnosticEngine::new(),
            module_loader: ModuleLoader::new(),
            buffer_paths: FxHashMap::default(),
            root_buffers: Vec::new(),
            parsed: HashMap::new(),
            modules: zomlc_util::index_vec::IndexVec::new(),
        }
    }

    pub fn lang_options(&self) -> LangOptions {
        self.lang_options
    }

    pub fn module_loader_mut(&mut self) -> &mut ModuleLoader {
        &mut self.module_loader
    }

    pub fn source_manager(&self) -> &SourceManager {
        &self.source_manager
    }

    /// Read `path` from disk and register it as a buffer to parse. Returns
    /// the new buffer's id; I/O failures surface as a `Result` rather than a
    /// diagnostic, since there is no source location to attach one to yet.
    pub fn add_source_file(&mut self, path: impl AsRef<Path>) -> DriverResult<BufferId> {
        let id = self.read_and_register(path.as_ref())?;
        self.root_buffers.push(id);
        Ok(id)
    }

    fn read_and_register(&mut self, path: &Path) -> DriverResult<BufferId> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            zomlc_util::error::SourceMapError::ReadFailed {
                path: path.display().to_string(),
                source,
            }
        })?;
        let content = strip_utf8_bom(content);
        let id = self.source_manager.add_buffer(path.display().to_string(), content);
        self.buffer_paths.insert(id, path.to_path_buf());
        Ok(id)
    }

    pub fn get_diagnostic_engine(&self) -> &DiagnosticEngine {
        &self.diagnostics
    }

    pub fn parsed_source_file(&self, buffer_id: BufferId) -> Option<&ast::SourceFile> {
        self.parsed.get(&buffer_id)
    }

    pub fn modules(&self) -> &zomlc_util::index_vec::IndexVec<ModuleId, Module> {
        &self.modules
    }

    /// Parse every buffer added so far (and any buffers transitively
    /// discovered by resolving their `import` declarations), in rounds: each
    /// round parses its whole batch in parallel via `rayon`, since a single
    /// round's buffers are independent and only write through the
    /// mutex-serialized `DiagnosticEngine`.
    ///
    /// Returns `true` iff no buffer raised an `Error`/`Fatal` diagnostic and
    /// no dependency cycle was found among the resolved imports.
    pub fn parse_sources(&mut self) -> bool {
        use rayon::prelude::*;

        let mut edges: Vec<ImportEdge> = Vec::new();
        let mut discovered: FxHashSet<BufferId> = self.root_buffers.iter().copied().collect();
        let mut batch = self.root_buffers.clone();

        while !batch.is_empty() {
            let results: Vec<(BufferId, ast::SourceFile)> = batch
                .par_iter()
                .filter_map(|&id| {
                    perform_parse(&self.source_manager, &self.diagnostics, &self.lang_options, id)
                        .map(|file| (id, file))
                })
                .collect();

            let mut next_batch = Vec::new();
            for (id, file) in &results {
                for import in imports_of(file) {
                    match self.resolve_import(*id, &import.path.0) {
                        Some(target) => {
                            if discovered.insert(target) {
                                next_batch.push(target);
                            }
                            edges.push(ImportEdge {
                                from: *id,
                                to: target,
                                range: import.range,
                            });
                        }
                        None => {
                            self.diagnostics
                                .diagnose(DiagID::IO_MODULE_NOT_FOUND, import.range)
                                .arg(import.path.0.clone())
                                .emit();
                        }
                    }
                }
            }
            self.parsed.extend(results);
            batch = next_batch;
        }

        self.report_dependency_cycles(&edges);
        self.build_modules(&edges);

        !self.diagnostics.had_any_error()
    }

    fn resolve_import(&mut self, from: BufferId, module_path: &str) -> Option<BufferId> {
        let importing_file = self.buffer_paths.get(&from)?.clone();
        let resolved_path = self.module_loader.resolve(&importing_file, module_path)?;
        if let Some(&existing) = self
            .buffer_paths
            .iter()
            .find(|(_, p)| **p == resolved_path)
            .map(|(id, _)| id)
        {
            return Some(existing);
        }
        match self.read_and_register(&resolved_path) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(path = %resolved_path.display(), error = %err, "failed to load resolved module");
                None
            }
        }
    }

    /// A back-edge in the import graph (an edge into a buffer that is an
    /// ancestor of the current DFS path) is a dependency cycle. Reported
    /// once per distinct cycle found, never blocking the buffers that did
    /// parse successfully.
    fn report_dependency_cycles(&self, edges: &[ImportEdge]) {
        let mut adjacency: FxHashMap<BufferId, Vec<&ImportEdge>> = FxHashMap::default();
        for edge in edges {
            adjacency.entry(edge.from).or_default().push(edge);
        }

        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            InProgress,
            Done,
        }
        let mut marks: FxHashMap<BufferId, Mark> = FxHashMap::default();
        let mut reported = FxHashSet::default();

        fn visit(
            node: BufferId,
            adjacency: &FxHashMap<BufferId, Vec<&ImportEdge>>,
            marks: &mut FxHashMap<BufferId, Mark>,
            diagnostics: &DiagnosticEngine,
            source_manager: &SourceManager,
            reported: &mut FxHashSet<BufferId>,
        ) {
            marks.insert(node, Mark::InProgress);
            if let Some(out_edges) = adjacency.get(&node) {
                for edge in out_edges {
                    match marks.get(&edge.to) {
                        Some(Mark::InProgress) => {
                            if reported.insert(edge.to) {
                                let name = source_manager.buffer_name(edge.to).unwrap_or("<unknown>");
                                diagnostics
                                    .diagnose(DiagID::IO_MODULE_CYCLE, edge.range)
                                    .arg(name.to_string())
                                    .emit();
                            }
                        }
                        Some(Mark::Done) => {}
                        None => visit(edge.to, adjacency, marks, diagnostics, source_manager, reported),
                    }
                }
            }
            marks.insert(node, Mark::Done);
        }

        for &root in &self.root_buffers {
            if !marks.contains_key(&root) {
                visit(
                    root,
                    &adjacency,
                    &mut marks,
                    &self.diagnostics,
                    &self.source_manager,
                    &mut reported,
                );
            }
        }
    }

    fn build_modules(&mut self, edges: &[ImportEdge]) {
        let mut buffer_to_module: FxHashMap<BufferId, ModuleId> = FxHashMap::default();
        let root_set: FxHashSet<BufferId> = self.root_buffers.iter().copied().collect();

        let mut all_buffers: Vec<BufferId> = self.parsed.keys().copied().collect();
        all_buffers.sort_by_key(|id| id.index());

        for buffer_id in &all_buffers {
            let kind = if root_set.contains(buffer_id) {
                ModuleKind::Executable
            } else {
                ModuleKind::Library
            };
            let name = self
                .buffer_paths
                .get(buffer_id)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("buffer#{}", buffer_id.index()));
            let mut module = Module::new(kind, name.clone());
            module.source_files.push(ModuleFile {
                filename: self.buffer_paths.get(buffer_id).cloned().unwrap_or_default(),
                buffer_id: *buffer_id,
            });
            module.phase = ModulePhase::Parsed;
            let module_id = self.modules.push(module);
            buffer_to_module.insert(*buffer_id, module_id);
        }

        for edge in edges {
            if let (Some(&from_module), Some(&to_module)) =
                (buffer_to_module.get(&edge.from), buffer_to_module.get(&edge.to))
            {
                if let Some(module) = self.modules.get_mut(from_module) {
                    if !module.dependencies.contains(&to_module) {
                        module.dependencies.push(to_module);
                    }
                }
            }
        }
    }
}

fn imports_of(file: &ast::SourceFile) -> Vec<&ast::ImportDeclaration> {
    match &file.module {
        Some(module) => module
            .elements
            .iter()
            .filter_map(|element| match element {
                ImplementationModuleElement::Import(import) => Some(import),
                _ => None,
            })
            .collect(),
        None => Vec::new(),
    }
}
