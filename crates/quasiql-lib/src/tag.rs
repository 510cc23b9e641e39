//! Validation of a single tagged literal.

use crate::graphql::{self, Document, Source};
use crate::host::TaggedLiteral;
use crate::{EXPERIMENTAL_TAG_NAME, Error, Result, StructuralError, TAG_NAME};

/// Whether a literal is tagged `graphql` or `graphql.experimental`.
pub fn is_graphql_tag(literal: &dyn TaggedLiteral) -> bool {
    literal.tag_identifier() == Some(TAG_NAME) || literal.matches_pattern(EXPERIMENTAL_TAG_NAME)
}

/// Extracts and parses the document of a GraphQL tag.
///
/// Returns `Ok(None)` when the literal is not a GraphQL tag at all. An eligible
/// literal must consist of a single text segment that parses to at least one
/// definition.
pub fn validate_tag(literal: &dyn TaggedLiteral) -> Result<Option<Document>> {
    if !is_graphql_tag(literal) {
        return Ok(None);
    }

    let location = literal.location();
    let segments = literal.quasi_segments();
    let [text] = segments.as_slice() else {
        return Err(Error::Structural {
            error: StructuralError::Substitutions {
                range: Some(location.range),
            },
            path: location.file,
        });
    };

    let source = Source::new(*text, location.file.display().to_string());
    let document = graphql::parse(&source)?;

    if document.is_empty() {
        return Err(Error::Structural {
            error: StructuralError::EmptyTag {
                range: Some(location.range),
            },
            path: location.file,
        });
    }

    Ok(Some(document))
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tag_tests;
