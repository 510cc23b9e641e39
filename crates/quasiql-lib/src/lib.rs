//! quasiql: extract and validate GraphQL tags embedded in JavaScript sources.
//!
//! # Example
//!
//! ```no_run
//! use quasiql_lib::{Diagnostics, File, ParserFactory};
//!
//! let parser = ParserFactory::new(["strip-bom"]).for_base_dir("./src").unwrap();
//! let mut diagnostics = Diagnostics::new();
//! let document = parser.parse(&File::new("App.js"), &mut diagnostics).unwrap();
//! eprintln!("{}", diagnostics.printer().render());
//! println!("{}", quasiql_lib::graphql::print(&document));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod diagnostics;
pub mod file;
pub mod finder;
pub mod graphql;
pub mod host;
pub mod module_parser;
pub mod tag;
pub mod transform;

mod invariants;

use std::path::PathBuf;

use rowan::TextRange;

pub use cache::{AstCache, CachingParser, MemoryCache, ParserFactory};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use file::{File, FileKey};
pub use finder::{FoundTag, MemoizedFinder, TagFinder, TreeSitterTagFinder};
pub use graphql::{Document, SyntaxError};
pub use module_parser::{ModuleParser, file_filter, is_eligible};
pub use tag::validate_tag;
pub use transform::{Transform, TransformChain, TransformFactory, TransformRegistry};

/// The substring every file carrying a GraphQL tag contains.
pub const TAG_NAME: &str = "graphql";

/// Deprecated spelling of [`TAG_NAME`], accepted with a warning.
pub const EXPERIMENTAL_TAG_NAME: &str = "graphql.experimental";

/// An eligible tag whose literal cannot be extracted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// The template literal interpolates expressions.
    #[error("substitutions are not allowed in graphql tags")]
    Substitutions { range: Option<TextRange> },

    /// The literal parsed to zero definitions.
    #[error("unexpected empty graphql tag")]
    EmptyTag { range: Option<TextRange> },
}

impl StructuralError {
    pub fn range(&self) -> Option<TextRange> {
        match self {
            Self::Substitutions { range } | Self::EmptyTag { range } => *range,
        }
    }
}

/// Pipeline misuse: a check that holds whenever callers follow the contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// A file reached the parser without passing the eligibility filter.
    #[error(
        "files should be filtered before they are parsed, got unfiltered file `{}`",
        .0.display()
    )]
    UnfilteredFile(PathBuf),

    /// A tag found by the finder parsed to zero definitions.
    #[error(
        "expected GraphQL text to contain at least one definition \
         (fragment, mutation, query, subscription), got `{text}` in {}",
        path.display()
    )]
    NoDefinitions {
        path: PathBuf,
        range: TextRange,
        text: String,
    },
}

/// Errors that abort extraction of a tag or parsing of a file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{error} in {}", path.display())]
    Structural {
        error: StructuralError,
        path: PathBuf,
    },

    #[error("invalid tag {tag} in {}, expected graphql``", path.display())]
    InvalidTag { tag: String, path: PathBuf },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("cannot resolve transform \"{name}\"")]
    TransformResolution {
        name: String,
        suggestion: Option<String>,
    },

    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Record this error in a diagnostics collection.
    pub fn report(&self, diagnostics: &mut Diagnostics) {
        match self {
            Error::Structural { error, path } => {
                let kind = match error {
                    StructuralError::Substitutions { .. } => DiagnosticKind::SubstitutionsInTag,
                    StructuralError::EmptyTag { .. } => DiagnosticKind::EmptyTag,
                };
                let mut builder = diagnostics.report(kind).file(path);
                if let Some(range) = error.range() {
                    builder = builder.range(range);
                }
                builder.emit();
            }
            Error::InvalidTag { tag, path } => {
                diagnostics
                    .report(DiagnosticKind::InvalidTag)
                    .file(path)
                    .message(tag)
                    .emit();
            }
            Error::Syntax(err) => {
                diagnostics
                    .report(DiagnosticKind::SyntaxError)
                    .file(std::path::Path::new(&err.name))
                    .range(err.file_range())
                    .message(err.to_string())
                    .emit();
            }
            Error::TransformResolution { name, suggestion } => {
                let mut builder = diagnostics
                    .report(DiagnosticKind::UnknownTransform)
                    .message(name);
                if let Some(suggestion) = suggestion {
                    builder = builder.hint(format!("did you mean `{suggestion}`?"));
                }
                builder.emit();
            }
            Error::Invariant(InvariantError::UnfilteredFile(path)) => {
                diagnostics
                    .report(DiagnosticKind::UnfilteredFile)
                    .file(path)
                    .emit();
            }
            Error::Invariant(InvariantError::NoDefinitions { path, range, text }) => {
                diagnostics
                    .report(DiagnosticKind::NoDefinitions)
                    .file(path)
                    .range(*range)
                    .message(text)
                    .emit();
            }
            Error::Io { path, source } => {
                diagnostics
                    .report(DiagnosticKind::Io)
                    .file(path)
                    .message(source.to_string())
                    .emit();
            }
        }
    }
}

/// Result type for extraction and parsing.
pub type Result<T> = std::result::Result<T, Error>;
