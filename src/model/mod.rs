//! Plain data: catalog products, recipes, menus and app settings.
//!
//! Field names serialize in camelCase so the structures round-trip through backup
//! documents unchanged (see [`crate::backup`]).

// Declared before the submodules so they can expand it.
/// Declares a `u32` newtype id with the `prefix_N` display form used in logs.
macro_rules! entity_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod allergen;
pub mod menu;
pub mod product;
pub mod recipe;
pub mod settings;

pub use allergen::*;
pub use menu::*;
pub use product::*;
pub use recipe::*;
pub use settings::*;
