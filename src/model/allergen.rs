use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The fourteen allergen groups that must be declared on a menu.
///
/// Serialized by their Spanish display names, which is also what the allergen matrix prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Allergen {
    #[serde(rename = "Gluten")]
    Gluten,
    #[serde(rename = "Crustáceos")]
    Crustaceans,
    #[serde(rename = "Huevos")]
    Eggs,
    #[serde(rename = "Pescado")]
    Fish,
    #[serde(rename = "Cacahuetes")]
    Peanuts,
    #[serde(rename = "Soja")]
    Soy,
    #[serde(rename = "Lácteos")]
    Dairy,
    #[serde(rename = "Frutos de cáscara")]
    TreeNuts,
    #[serde(rename = "Apio")]
    Celery,
    #[serde(rename = "Mostaza")]
    Mustard,
    #[serde(rename = "Sésamo")]
    Sesame,
    #[serde(rename = "Sulfitos")]
    Sulphites,
    #[serde(rename = "Altramuces")]
    Lupin,
    #[serde(rename = "Moluscos")]
    Molluscs,
}

impl Allergen {
    pub const ALL: [Allergen; 14] = [
        Allergen::Gluten,
        Allergen::Crustaceans,
        Allergen::Eggs,
        Allergen::Fish,
        Allergen::Peanuts,
        Allergen::Soy,
        Allergen::Dairy,
        Allergen::TreeNuts,
        Allergen::Celery,
        Allergen::Mustard,
        Allergen::Sesame,
        Allergen::Sulphites,
        Allergen::Lupin,
        Allergen::Molluscs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Allergen::Gluten => "Gluten",
            Allergen::Crustaceans => "Crustáceos",
            Allergen::Eggs => "Huevos",
            Allergen::Fish => "Pescado",
            Allergen::Peanuts => "Cacahuetes",
            Allergen::Soy => "Soja",
            Allergen::Dairy => "Lácteos",
            Allergen::TreeNuts => "Frutos de cáscara",
            Allergen::Celery => "Apio",
            Allergen::Mustard => "Mostaza",
            Allergen::Sesame => "Sésamo",
            Allergen::Sulphites => "Sulfitos",
            Allergen::Lupin => "Altramuces",
            Allergen::Molluscs => "Moluscos",
        }
    }
}

impl Display for Allergen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
