//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use quasiql_langs::{FieldId, Lang, NodeKindId};

/// Node kind the host grammar must define.
pub(crate) fn ensure_kind(lang: &Lang, kind: &str) -> NodeKindId {
    lang.resolve_named_node(kind).unwrap_or_else(|| {
        panic!(
            "host grammar `{}` has no node kind `{kind}` \
             (tag discovery requires an ECMAScript grammar)",
            lang.name()
        )
    })
}

/// Field the host grammar must define.
pub(crate) fn ensure_field(lang: &Lang, field: &str) -> FieldId {
    lang.resolve_field(field).unwrap_or_else(|| {
        panic!(
            "host grammar `{}` has no field `{field}` \
             (tag discovery requires an ECMAScript grammar)",
            lang.name()
        )
    })
}
