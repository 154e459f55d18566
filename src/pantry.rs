//! The pantry: ingredients currently on hand.
//!
//! Items are identified for merging by `(name, unit)`: adding "卵 2個" to a
//! pantry holding "卵 4個" leaves one item with 6. Different units are kept
//! apart ("牛乳 1本" and "牛乳 500ml"). The pantry is persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PantryError, PantryResult};
use crate::extract::ExtractedIngredient;

/// One stored ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: u64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    /// Seconds since the Unix epoch when the item was first stored.
    #[serde(default)]
    pub added_at: u64,
}

/// What [`Pantry::upsert`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(u64),
    Merged(u64),
}

/// What [`Pantry::consume`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumeOutcome {
    /// Quantity left after consumption.
    Remaining(f64),
    /// The item ran out and was removed.
    Removed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pantry {
    next_id: u64,
    items: Vec<PantryItem>,
}

impl Default for Pantry {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
        }
    }
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str, unit: &str) -> Option<&PantryItem> {
        self.items.iter().find(|i| i.name == name && i.unit == unit)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a PantryItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// Add an ingredient, summing into an existing item with the same
    /// `(name, unit)`. The existing item keeps its category.
    pub fn upsert(&mut self, ingredient: &ExtractedIngredient) -> PantryResult<UpsertOutcome> {
        validate_quantity(ingredient.quantity)?;

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.name == ingredient.name && i.unit == ingredient.unit)
        {
            item.quantity += ingredient.quantity;
            tracing::info!(
                id = item.id,
                name = %item.name,
                quantity = item.quantity,
                unit = %item.unit,
                "pantry item merged"
            );
            return Ok(UpsertOutcome::Merged(item.id));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(PantryItem {
            id,
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            category: ingredient.category.clone(),
            added_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        });
        tracing::info!(
            id,
            name = %ingredient.name,
            quantity = ingredient.quantity,
            unit = %ingredient.unit,
            category = %ingredient.category,
            "pantry item added"
        );
        Ok(UpsertOutcome::Inserted(id))
    }

    /// Upsert every ingredient in order. Nothing is stored if any quantity
    /// is invalid.
    pub fn upsert_all(&mut self, ingredients: &[ExtractedIngredient]) -> PantryResult<Vec<UpsertOutcome>> {
        for ingredient in ingredients {
            validate_quantity(ingredient.quantity)?;
        }
        ingredients.iter().map(|i| self.upsert(i)).collect()
    }

    /// Use up `quantity` of an item. Without a unit the first item with the
    /// name is used. Reaching zero or below removes the item.
    pub fn consume(&mut self, name: &str, unit: Option<&str>, quantity: f64) -> PantryResult<ConsumeOutcome> {
        validate_quantity(quantity)?;

        let Some(pos) = self
            .items
            .iter()
            .position(|i| i.name == name && unit.is_none_or(|u| i.unit == u))
        else {
            return Err(PantryError::NotFound {
                item: match unit {
                    Some(u) => format!("\"{name}\" ({u})"),
                    None => format!("\"{name}\""),
                },
            });
        };

        let item = &mut self.items[pos];
        item.quantity -= quantity;
        if item.quantity <= 0.0 {
            let removed = self.items.remove(pos);
            tracing::info!(id = removed.id, name = %removed.name, "pantry item used up");
            return Ok(ConsumeOutcome::Removed);
        }
        tracing::info!(
            id = item.id,
            name = %item.name,
            remaining = item.quantity,
            unit = %item.unit,
            "pantry item consumed"
        );
        Ok(ConsumeOutcome::Remaining(item.quantity))
    }

    pub fn to_json(&self) -> PantryResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PantryError::Serialization {
            message: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> PantryResult<Self> {
        serde_json::from_str(json).map_err(|e| PantryError::Serialization {
            message: e.to_string(),
        })
    }

    /// Load from `path`; a missing file yields an empty pantry.
    pub fn load(path: &Path) -> PantryResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(source) => Err(PantryError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn save(&self, path: &Path) -> PantryResult<()> {
        let content = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PantryError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| PantryError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

fn validate_quantity(quantity: f64) -> PantryResult<()> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(PantryError::InvalidQuantity { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ing(name: &str, quantity: f64, unit: &str, category: &str) -> ExtractedIngredient {
        ExtractedIngredient {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: category.into(),
        }
    }

    #[test]
    fn merge_by_name_and_unit() {
        let mut pantry = Pantry::new();
        assert_eq!(pantry.upsert(&ing("卵", 4.0, "個", "その他")).unwrap(), UpsertOutcome::Inserted(1));
        assert_eq!(pantry.upsert(&ing("卵", 2.0, "個", "その他")).unwrap(), UpsertOutcome::Merged(1));
        assert_eq!(pantry.len(), 1);
        assert_eq!(pantry.get("卵", "個").unwrap().quantity, 6.0);
    }

    #[test]
    fn different_units_stay_apart() {
        let mut pantry = Pantry::new();
        pantry.upsert(&ing("牛乳", 1.0, "本", "乳製品")).unwrap();
        pantry.upsert(&ing("牛乳", 500.0, "ml", "乳製品")).unwrap();
        assert_eq!(pantry.len(), 2);
        assert_eq!(pantry.items()[1].id, 2);
    }

    #[test]
    fn consume_partial_and_to_zero() {
        let mut pantry = Pantry::new();
        pantry.upsert(&ing("トマト", 3.0, "個", "野菜")).unwrap();
        assert_eq!(pantry.consume("トマト", None, 1.0).unwrap(), ConsumeOutcome::Remaining(2.0));
        assert_eq!(pantry.consume("トマト", Some("個"), 5.0).unwrap(), ConsumeOutcome::Removed);
        assert!(pantry.is_empty());
    }

    #[test]
    fn consume_unknown_item() {
        let mut pantry = Pantry::new();
        pantry.upsert(&ing("トマト", 3.0, "個", "野菜")).unwrap();
        assert!(matches!(
            pantry.consume("なす", None, 1.0),
            Err(PantryError::NotFound { .. })
        ));
        assert!(matches!(
            pantry.consume("トマト", Some("袋"), 1.0),
            Err(PantryError::NotFound { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_quantities() {
        let mut pantry = Pantry::new();
        assert!(matches!(
            pantry.upsert(&ing("卵", 0.0, "個", "その他")),
            Err(PantryError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            pantry.consume("卵", None, f64::NAN),
            Err(PantryError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn upsert_all_is_all_or_nothing() {
        let mut pantry = Pantry::new();
        pantry.upsert(&ing("卵", 2.0, "個", "その他")).unwrap();
        let before = pantry.clone();

        let batch = [ing("トマト", 3.0, "個", "野菜"), ing("卵", 0.0, "個", "その他")];
        assert!(matches!(
            pantry.upsert_all(&batch),
            Err(PantryError::InvalidQuantity { .. })
        ));
        assert_eq!(pantry, before);
        assert!(pantry.get("トマト", "個").is_none());
    }

    #[test]
    fn filter_by_category() {
        let mut pantry = Pantry::new();
        pantry
            .upsert_all(&[
                ing("トマト", 3.0, "個", "野菜"),
                ing("鶏肉", 2.0, "枚", "肉"),
                ing("なす", 1.0, "本", "野菜"),
            ])
            .unwrap();
        let names: Vec<&str> = pantry.by_category("野菜").map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["トマト", "なす"]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut pantry = Pantry::new();
        pantry.upsert(&ing("卵", 1.0, "個", "その他")).unwrap();
        pantry.consume("卵", None, 1.0).unwrap();
        assert_eq!(pantry.upsert(&ing("卵", 1.0, "個", "その他")).unwrap(), UpsertOutcome::Inserted(2));
    }

    #[test]
    fn json_shape() {
        let mut pantry = Pantry::new();
        pantry.upsert(&ing("卵", 1.0, "個", "その他")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&pantry.to_json().unwrap()).unwrap();
        assert_eq!(value["next_id"], 2);
        assert_eq!(value["items"][0]["name"], "卵");
    }
}
