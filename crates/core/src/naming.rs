//! Source-to-class naming conventions.
//!
//! Each source language maps its file name onto one or more compiled class
//! names. Java produces `Foo.class` for `Foo.java`; Kotlin may produce either
//! `Foo.class` or, for files holding top-level functions, `FooKt.class`.

/// Extension carried by every compiled artifact.
pub const CLASS_EXTENSION: &str = ".class";

/// Extension given to decompiled output files.
pub const JAVA_EXTENSION: &str = ".java";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Java,
    Kotlin,
    /// A bare class name typed or selected by the user, language unknown.
    Symbol,
    /// Any other JVM language registered through a custom [`NamingRule`],
    /// labelled by name (e.g. `"groovy"`).
    Other(&'static str),
}

/// One entry of the naming table: a source suffix and the class name
/// variants it compiles to.
#[derive(Debug, Clone)]
pub struct NamingRule {
    /// Lowercase source suffix including the dot, e.g. `.kt`.
    pub suffix: String,
    pub kind: SourceKind,
    /// Strings appended to the file stem before `.class`. The empty string
    /// stands for the plain `<stem>.class` name.
    pub class_suffixes: Vec<String>,
}

impl NamingRule {
    pub fn new(suffix: &str, kind: SourceKind, class_suffixes: &[&str]) -> Self {
        Self {
            suffix: suffix.to_ascii_lowercase(),
            kind,
            class_suffixes: class_suffixes.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The class file names a single source may compile to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedClass {
    pub kind: SourceKind,
    pub stem: String,
    names: Vec<String>,
}

impl ExpectedClass {
    fn new(kind: SourceKind, stem: &str, class_suffixes: &[String]) -> Self {
        let names = class_suffixes
            .iter()
            .map(|suffix| format!("{}{}{}", stem, suffix, CLASS_EXTENSION))
            .collect();
        Self {
            kind,
            stem: stem.to_string(),
            names,
        }
    }

    /// The plain `<stem>.class` name.
    pub fn primary_name(&self) -> String {
        format!("{}{}", self.stem, CLASS_EXTENSION)
    }

    /// All accepted class file names, in preference order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Exact, case-sensitive comparison against every accepted name.
    pub fn matches(&self, file_name: &str) -> bool {
        self.names.iter().any(|name| name == file_name)
    }
}

/// Table of source suffix to compiled name transforms.
#[derive(Debug, Clone)]
pub struct NamingTable {
    rules: Vec<NamingRule>,
    symbol_suffixes: Vec<String>,
}

impl NamingTable {
    /// An empty table. Symbol lookups still accept the plain and `Kt` names.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            symbol_suffixes: vec![String::new(), "Kt".to_string()],
        }
    }

    pub fn with_rule(mut self, rule: NamingRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[NamingRule] {
        &self.rules
    }

    /// Maps a source file name onto its expected class names.
    ///
    /// Suffix recognition ignores ASCII case (`Foo.JAVA` is a Java source).
    /// Returns `None` for anything that is not a recognized source file.
    pub fn expected_for_source(&self, file_name: &str) -> Option<ExpectedClass> {
        let lowered = file_name.to_ascii_lowercase();
        let rule = self
            .rules
            .iter()
            .find(|rule| lowered.ends_with(&rule.suffix))?;

        // ASCII lowercasing keeps byte offsets intact.
        let stem = &file_name[..file_name.len() - rule.suffix.len()];
        if stem.is_empty() {
            return None;
        }

        Some(ExpectedClass::new(rule.kind, stem, &rule.class_suffixes))
    }

    /// Maps a class name such as `Foo` or `com.example.Foo` onto the class
    /// names it may be compiled to.
    pub fn expected_for_symbol(&self, symbol: &str) -> Option<ExpectedClass> {
        let symbol = symbol.trim();
        let simple = symbol.rsplit('.').next().unwrap_or(symbol);
        if simple.is_empty() || simple.contains(['/', '\\']) || simple.contains(char::is_whitespace)
        {
            return None;
        }

        Some(ExpectedClass::new(
            SourceKind::Symbol,
            simple,
            &self.symbol_suffixes,
        ))
    }
}

impl Default for NamingTable {
    fn default() -> Self {
        Self::new()
            .with_rule(NamingRule::new(".java", SourceKind::Java, &[""]))
            .with_rule(NamingRule::new(".kt", SourceKind::Kotlin, &["", "Kt"]))
    }
}

/// Name of the decompiled output file for a class file name:
/// `Foo.class` becomes `Foo.java`, anything else is kept unchanged.
pub fn decompiled_file_name(class_file_name: &str) -> String {
    match class_file_name.strip_suffix(CLASS_EXTENSION) {
        Some(stem) => format!("{}{}", stem, JAVA_EXTENSION),
        None => class_file_name.to_string(),
    }
}
