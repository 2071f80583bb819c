//! Planned menus: an ordered recipe selection and a pax count.
//!
//! Managed by the menu actor; see [`crate::menu_actor`].

use super::RecipeId;
use crate::planning::MenuSelection;
use serde::{Deserialize, Serialize};

entity_id!(MenuId, "menu");

/// A menu planned for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub selection: MenuSelection,
}

impl Menu {
    pub fn new(id: MenuId, name: impl Into<String>, selection: MenuSelection) -> Self {
        Self {
            id,
            name: name.into(),
            selection,
        }
    }
}

/// Payload for planning a new menu.
#[derive(Debug, Clone)]
pub struct MenuCreate {
    pub name: String,
    pub pax: u32,
    pub recipes: Vec<RecipeId>,
}

/// Renames a menu. Selection changes go through [`crate::menu_actor::MenuAction`].
#[derive(Debug, Clone, Default)]
pub struct MenuUpdate {
    pub name: Option<String>,
}
