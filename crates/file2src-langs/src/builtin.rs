use file2src_core::Dialect;

use crate::Lang;

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                name: $name:literal,
                dialect: $dialect:expr,
                default_type: $default_type:literal,
                names: [$($alias:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            #[cfg(feature = $feature)]
            pub fn $fn_name() -> Lang {
                Lang {
                    name: $name,
                    aliases: &[$($alias),*],
                    dialect: $dialect,
                    default_type: $default_type,
                }
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
    c => {
        feature: "lang-c",
        name: "c",
        dialect: Dialect::C,
        default_type: "unsigned char",
        names: ["c", "cpp", "c++", "h"],
    },
    go => {
        feature: "lang-go",
        name: "go",
        dialect: Dialect::Go,
        default_type: "byte",
        names: ["go", "golang"],
    },
    rust => {
        feature: "lang-rust",
        name: "rust",
        dialect: Dialect::Rust,
        default_type: "u8",
        names: ["rust", "rs"],
    },
}
