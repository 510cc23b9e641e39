use std::sync::{Arc, LazyLock};

use crate::{Lang, LangInner};

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                name: $name:literal,
                ts_lang: $ts_lang:expr,
                names: [$($alias:literal),* $(,)?],
                extensions: [$($ext:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            #[cfg(feature = $feature)]
            pub fn $fn_name() -> Lang {
                static LANG: LazyLock<Lang> = LazyLock::new(|| {
                    Arc::new(LangInner::new_static(
                        $name,
                        &[$($ext),*],
                        $ts_lang.into(),
                    ))
                });
                Arc::clone(&LANG)
            }
        )*

        pub fn from_name(s: &str) -> Option<Lang> {
            match s.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($alias)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn from_ext(ext: &str) -> Option<Lang> {
            match ext.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($ext)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn all() -> Vec<Lang> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    $fn_name(),
                )*
            ]
        }
    };
}

define_langs! {
    javascript => {
        feature: "lang-javascript",
        name: "javascript",
        ts_lang: arborium_javascript::language(),
        names: ["javascript", "js", "jsx", "ecmascript", "es"],
        extensions: ["js", "mjs", "cjs", "jsx"],
    },
    typescript => {
        feature: "lang-typescript",
        name: "typescript",
        ts_lang: arborium_typescript::language(),
        names: ["typescript", "ts"],
        extensions: ["ts", "mts", "cts"],
    },
    tsx => {
        feature: "lang-tsx",
        name: "tsx",
        ts_lang: arborium_tsx::language(),
        names: ["tsx"],
        extensions: ["tsx"],
    },
}

/// Language for a file path: by extension, falling back to JavaScript.
///
/// Files a transform turned into script text (e.g. `.vue`) keep their
/// original extension, so unknown extensions are treated as JavaScript.
#[cfg(feature = "lang-javascript")]
pub fn for_path(path: &std::path::Path) -> Lang {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(from_ext)
        .unwrap_or_else(javascript)
}
