//! Loaded Go packages and import-path resolution.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use docgen_core::naming::path_base;

use crate::error::ParserError;
use crate::extractors::go;
use crate::gomod;
use crate::parser::{is_go_source, parse_source};
use crate::types::{ConstGroup, GoFile, ImportSpec, StructDecl};
use crate::walk::build_walker;

/// Loader switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Do not load packages below `vendor/` directories.
    pub skip_vendor: bool,
}

/// Index of a module within its [`ModuleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(usize);

/// One Go package: every non-test file of a directory sharing a package clause.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub package: String,
    pub import_path: String,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// Import table per file, indexed like `files`.
    imports: Vec<Vec<ImportSpec>>,
    pub structs: Vec<StructDecl>,
    pub const_groups: Vec<ConstGroup>,
    pub part_definitions: Vec<(String, String)>,
}

impl Module {
    /// Merge the extracted files of one package.
    #[must_use]
    pub fn assemble(import_path: impl Into<String>, dir: PathBuf, files: Vec<(PathBuf, GoFile)>) -> Self {
        let mut module = Self {
            import_path: import_path.into(),
            dir,
            ..Self::default()
        };
        for (index, (path, file)) in files.into_iter().enumerate() {
            if module.package.is_empty() {
                module.package = file.package;
            }
            module.files.push(path);
            module.imports.push(file.imports);
            module
                .structs
                .extend(file.structs.into_iter().map(|decl| StructDecl { file: index, ..decl }));
            module.const_groups.extend(file.const_groups);
            module.part_definitions.extend(file.part_definitions);
        }
        module
    }

    /// Build a module straight from source text.
    #[must_use]
    pub fn from_sources(import_path: &str, sources: &[&str]) -> Self {
        let files = sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let tree = parse_source(source);
                (PathBuf::from(format!("source{i}.go")), go::extract(&tree))
            })
            .collect();
        Self::assemble(import_path, PathBuf::from(import_path), files)
    }

    /// Last import path segment, falling back to the package name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        let base = path_base(&self.import_path);
        if base.is_empty() { &self.package } else { base }
    }

    /// First exported struct whose name matches `name` case-insensitively.
    #[must_use]
    pub fn find_struct(&self, name: &str) -> Option<&StructDecl> {
        self.structs
            .iter()
            .find(|decl| decl.is_exported() && decl.name.eq_ignore_ascii_case(name))
    }

    /// Exported struct declared under exactly `name`, as referenced from Go code.
    #[must_use]
    pub fn lookup_struct(&self, name: &str) -> Option<&StructDecl> {
        self.structs
            .iter()
            .find(|decl| decl.is_exported() && decl.name == name)
    }

    /// Imports of the file at `file` (see [`StructDecl::file`]).
    #[must_use]
    pub fn imports(&self, file: usize) -> &[ImportSpec] {
        self.imports.get(file).map_or(&[], Vec::as_slice)
    }

    /// Labels of the constants in every group marked `<marker_prefix><type_name>`.
    ///
    /// A constant whose own comment ends in `<marker_prefix><label>` is listed
    /// under that label, otherwise under its identifier. Constants named in
    /// `excluded` are left out.
    #[must_use]
    pub fn enum_values(&self, type_name: &str, marker_prefix: &str, excluded: &[String]) -> Vec<String> {
        self.const_groups
            .iter()
            .filter(|group| {
                group
                    .marker()
                    .strip_prefix(marker_prefix)
                    .is_some_and(|name| name.trim() == type_name)
            })
            .flat_map(|group| group.specs.iter())
            .filter(|spec| !excluded.contains(&spec.name))
            .map(|spec| {
                spec.marker()
                    .strip_prefix(marker_prefix)
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .unwrap_or(&spec.name)
                    .to_string()
            })
            .collect()
    }
}

/// How a package identifier used in a qualified type resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageResolution {
    Loaded(ModuleId),
    /// Imported, but the package is outside the loaded tree (stdlib, missing vendor).
    Unloaded { import_path: String },
    /// Not imported by the declaring file.
    Unknown,
}

/// Every package loaded for one run.
#[derive(Debug, Clone, Default)]
pub struct ModuleSet {
    modules: Vec<Module>,
    by_path: HashMap<String, ModuleId>,
    roots: Vec<ModuleId>,
}

impl ModuleSet {
    /// Build a set from already-assembled modules; `roots` index into `modules`.
    #[must_use]
    pub fn new(modules: Vec<Module>, roots: &[usize]) -> Self {
        let mut by_path = HashMap::new();
        for (index, module) in modules.iter().enumerate() {
            by_path.entry(module.import_path.clone()).or_insert(ModuleId(index));
        }
        let roots = roots
            .iter()
            .copied()
            .filter(|index| *index < modules.len())
            .map(ModuleId)
            .collect();
        Self {
            modules,
            by_path,
            roots,
        }
    }

    /// Load every package of the Go module containing `root`.
    ///
    /// # Errors
    /// Returns `ParserError::RootNotFound` if `root` is not a directory,
    /// `ParserError::NoSources` if it holds no Go sources, and I/O, walk or
    /// `go.mod` errors as they occur.
    pub fn load(root: &Path, options: &LoadOptions) -> Result<Self, ParserError> {
        let root = root
            .canonicalize()
            .map_err(|_| ParserError::RootNotFound(root.to_path_buf()))?;
        if !root.is_dir() {
            return Err(ParserError::RootNotFound(root));
        }

        let go_mod = gomod::find(&root)?;
        let (base_dir, module_path) = match go_mod {
            Some(m) => (m.dir, Some(m.module_path)),
            None => (root.clone(), None),
        };
        tracing::debug!(
            base_dir = %base_dir.display(),
            module_path = module_path.as_deref().unwrap_or_default(),
            "loading Go packages"
        );

        let mut by_dir: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
        for entry in build_walker(&base_dir, options.skip_vendor) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_some_and(|ft| ft.is_file())
                || !is_go_source(&path.to_string_lossy())
            {
                continue;
            }
            if let Some(dir) = path.parent() {
                by_dir.entry(dir.to_path_buf()).or_default().push(path.to_path_buf());
            }
        }
        if !by_dir.contains_key(&root) {
            return Err(ParserError::NoSources(root));
        }

        let mut modules = Vec::new();
        let mut roots = Vec::new();
        for (dir, mut paths) in by_dir {
            paths.sort();
            let import_path = import_path_for(&base_dir, &dir, module_path.as_deref());
            for module in load_dir(&dir, &paths, &import_path)? {
                if dir == root {
                    roots.push(modules.len());
                }
                modules.push(module);
            }
        }
        tracing::debug!(modules = modules.len(), roots = roots.len(), "loaded Go packages");
        Ok(Self::new(modules, &roots))
    }

    /// # Panics
    /// Panics if `id` was not produced by this set.
    #[must_use]
    pub fn get(&self, id: ModuleId) -> &Module {
        &self.modules[id.0]
    }

    #[must_use]
    pub fn by_import_path(&self, import_path: &str) -> Option<ModuleId> {
        self.by_path.get(import_path).copied()
    }

    /// Modules loaded from the requested root directory.
    #[must_use]
    pub fn roots(&self) -> &[ModuleId] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(index, module)| (ModuleId(index), module))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Resolve the package identifier of a qualified type (`netopts` in
    /// `netopts.Options`) through the imports of the declaring file.
    #[must_use]
    pub fn resolve_package(&self, module: ModuleId, file: usize, package: &str) -> PackageResolution {
        let imports = self.get(module).imports(file);

        if let Some(spec) = imports.iter().find(|i| i.alias.as_deref() == Some(package)) {
            return self.lookup(&spec.path);
        }
        for spec in imports.iter().filter(|i| i.alias.is_none()) {
            match self.by_import_path(&spec.path) {
                Some(id) if self.get(id).package == package => return PackageResolution::Loaded(id),
                Some(id) if path_base(&spec.path) == package => return PackageResolution::Loaded(id),
                None if path_base(&spec.path) == package => {
                    return PackageResolution::Unloaded {
                        import_path: spec.path.clone(),
                    };
                }
                _ => {}
            }
        }
        PackageResolution::Unknown
    }

    fn lookup(&self, import_path: &str) -> PackageResolution {
        self.by_import_path(import_path).map_or_else(
            || PackageResolution::Unloaded {
                import_path: import_path.to_string(),
            },
            PackageResolution::Loaded,
        )
    }
}

/// Parse the files of one directory, one module per package clause.
fn load_dir(dir: &Path, paths: &[PathBuf], import_path: &str) -> Result<Vec<Module>, ParserError> {
    let mut packages: BTreeMap<String, Vec<(PathBuf, GoFile)>> = BTreeMap::new();
    for path in paths {
        let source = std::fs::read_to_string(path)?;
        let tree = parse_source(&source);
        let file = go::extract(&tree);
        if file.has_errors {
            tracing::warn!(path = %path.display(), "Go source has syntax errors; extraction is best effort");
        }
        packages
            .entry(file.package.clone())
            .or_default()
            .push((path.clone(), file));
    }
    Ok(packages
        .into_values()
        .map(|files| Module::assemble(import_path, dir.to_path_buf(), files))
        .collect())
}

/// Import path of the package in `dir`. Packages under `vendor/` are addressed
/// relative to the innermost vendor directory.
fn import_path_for(base_dir: &Path, dir: &Path, module_path: Option<&str>) -> String {
    let segments: Vec<String> = dir
        .strip_prefix(base_dir)
        .unwrap_or(dir)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if let Some(vendor) = segments.iter().rposition(|s| s == "vendor") {
        return segments[vendor + 1..].join("/");
    }
    let relative = segments.join("/");
    match module_path {
        Some(module) if relative.is_empty() => module.to_string(),
        Some(module) => format!("{module}/{relative}"),
        None => relative,
    }
}
