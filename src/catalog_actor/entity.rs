//! [`ActorEntity`] implementation for [`Product`].

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        check_name(&params.name)?;
        if let Some(price) = params.price {
            check_price(price)?;
        }
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            unit: params.unit,
            allergens: params.allergens,
            price: params.price,
        })
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Renaming does not touch recipes: ingredients refer to products by name only.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(allergens) = update.allergens {
            self.allergens = allergens;
        }
        if let Some(price) = update.price {
            self.price = Some(price);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ProductError> {
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}
