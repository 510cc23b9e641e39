use rowan::TextRange;

/// Diagnostic kinds, ordered roughly by the pipeline stage that produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Chain construction
    UnknownTransform,

    // File access
    Io,
    UnfilteredFile,

    // Per-occurrence checks
    InvalidTag,
    SubstitutionsInTag,
    EmptyTag,
    SyntaxError,
    NoDefinitions,

    // Non-fatal
    DeprecatedTag,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DeprecatedTag => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidTag => Some("expected graphql``"),
            Self::SubstitutionsInTag => {
                Some("reference included fragments with a spread, e.g. `...MyModule_propName`")
            }
            Self::DeprecatedTag => {
                Some("no other changes are needed; graphql.experimental will be removed")
            }
            Self::UnfilteredFile => Some("filter files with `is_eligible` before parsing"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnknownTransform => "unknown transform",
            Self::Io => "cannot read file",
            Self::UnfilteredFile => "file does not mention graphql",
            Self::InvalidTag => "invalid tag",
            Self::SubstitutionsInTag => "substitutions are not allowed in graphql tags",
            Self::EmptyTag => "unexpected empty graphql tag",
            Self::SyntaxError => "syntax error",
            Self::NoDefinitions => "expected at least one definition",
            Self::DeprecatedTag => "graphql.experimental`...` is deprecated",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownTransform => "cannot resolve transform `{}`".to_string(),
            Self::InvalidTag => "invalid tag `{}`".to_string(),
            Self::SyntaxError => "{}".to_string(),
            Self::DeprecatedTag => {
                "graphql.experimental`...` usage should be replaced with graphql`...` in \"{}\""
                    .to_string()
            }
            Self::NoDefinitions => {
                "expected GraphQL text to contain at least one definition, got `{}`".to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Path of the file the diagnostic belongs to, as given to the parser.
    pub(crate) file: Option<String>,
    /// Byte range in the file. `None` when the problem is not tied to a location.
    pub(crate) range: Option<TextRange>,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            file: None,
            range: None,
            message: message.into(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind) -> Self {
        Self::new(kind, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn range(&self) -> Option<TextRange> {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.severity())?;
        if let Some(file) = &self.file {
            write!(f, " in {file}")?;
        }
        if let Some(range) = self.range {
            write!(
                f,
                " at {}..{}",
                u32::from(range.start()),
                u32::from(range.end())
            )?;
        }
        write!(f, ": {}", self.message)?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
