use super::error::PlanningError;
use crate::model::RecipeId;
use serde::{Deserialize, Serialize};

/// Ordered recipe references and the number of diners to plan for.
///
/// The same recipe may appear more than once; each entry is scaled and counted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSelection")]
pub struct MenuSelection {
    recipes: Vec<RecipeId>,
    pax: u32,
}

impl MenuSelection {
    pub fn new(pax: u32) -> Result<Self, PlanningError> {
        check_pax(pax)?;
        Ok(Self {
            recipes: Vec::new(),
            pax,
        })
    }

    pub fn with_recipes(mut self, recipes: impl IntoIterator<Item = RecipeId>) -> Self {
        self.recipes.extend(recipes);
        self
    }

    pub fn recipes(&self) -> &[RecipeId] {
        &self.recipes
    }

    pub fn pax(&self) -> u32 {
        self.pax
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn push(&mut self, recipe: RecipeId) {
        self.recipes.push(recipe);
    }

    /// Removes the entry at `index`, returning it.
    pub fn remove(&mut self, index: usize) -> Result<RecipeId, PlanningError> {
        if index >= self.recipes.len() {
            return Err(PlanningError::PositionOutOfRange {
                index,
                len: self.recipes.len(),
            });
        }
        Ok(self.recipes.remove(index))
    }

    /// Swaps the entry at `index` with the one before it.
    ///
    /// Returns `false` and leaves the selection unchanged for the first entry or an
    /// out-of-range index.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.recipes.len() {
            return false;
        }
        self.recipes.swap(index - 1, index);
        true
    }

    /// Swaps the entry at `index` with the one after it. No-op on the last entry.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.recipes.len().saturating_sub(1) {
            return false;
        }
        self.recipes.swap(index, index + 1);
        true
    }

    pub fn set_pax(&mut self, pax: u32) -> Result<(), PlanningError> {
        check_pax(pax)?;
        self.pax = pax;
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawSelection {
    #[serde(default)]
    recipes: Vec<RecipeId>,
    pax: u32,
}

impl TryFrom<RawSelection> for MenuSelection {
    type Error = PlanningError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.pax)?.with_recipes(raw.recipes))
    }
}

fn check_pax(pax: u32) -> Result<(), PlanningError> {
    if pax == 0 {
        return Err(PlanningError::InvalidPax(pax));
    }
    Ok(())
}
