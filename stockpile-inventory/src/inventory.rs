//! Product inventory records over the tabular layer.
//!
//! An inventory is a row-aligned triple: one attribute row, one name, and
//! one quantity per product. The manager keeps the three sequences in
//! lock-step and layers queries, deduplication, merging, and proportional
//! splitting on top.

use core::fmt;
use std::collections::HashSet;
use std::ops::RangeInclusive;

use stockpile_collections::OutOfRange;

use crate::table::{Series, Table};

/// A named numeric attribute of a product, e.g. `{weight: 1.5}`.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryAttribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: f64,
}

impl InventoryAttribute {
    /// Creates an attribute.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for InventoryAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {}}}", self.name, self.value)
    }
}

/// Ordering of query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lexicographically ascending product names.
    Ascending,
    /// Lexicographically descending product names.
    Descending,
}

/// Product records: attribute rows, names, and quantities, row-aligned.
///
/// # Example
///
/// ```
/// use stockpile_inventory::{InventoryAttribute, InventoryManager, Series, SortOrder};
///
/// let mut inventory = InventoryManager::new();
/// inventory.add_product(
///     Series::from_slice(&[InventoryAttribute::new("weight", 1.5)]),
///     "bolt",
///     120,
/// );
/// inventory.add_product(
///     Series::from_slice(&[InventoryAttribute::new("weight", 4.0)]),
///     "anchor",
///     6,
/// );
///
/// let heavy = inventory.query("weight", 2.0..=10.0, 1, SortOrder::Ascending);
/// assert_eq!(heavy.to_string(), "[anchor]");
/// ```
#[derive(Clone, Default)]
pub struct InventoryManager {
    attributes: Table<InventoryAttribute>,
    names: Series<String>,
    quantities: Series<i64>,
}

impl InventoryManager {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self {
            attributes: Table::new(),
            names: Series::new(),
            quantities: Series::new(),
        }
    }

    /// Assembles an inventory from its three parts.
    ///
    /// # Panics
    ///
    /// Panics if the parts disagree on the number of products.
    pub fn from_parts(
        attributes: Table<InventoryAttribute>,
        names: Series<String>,
        quantities: Series<i64>,
    ) -> Self {
        assert_eq!(attributes.rows(), names.len(), "one attribute row per product");
        assert_eq!(names.len(), quantities.len(), "one quantity per product");
        Self {
            attributes,
            names,
            quantities,
        }
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no products.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the attribute row of the product at `index`.
    pub fn product_attributes(
        &self,
        index: usize,
    ) -> Result<&Series<InventoryAttribute>, OutOfRange> {
        self.attributes.row(index)
    }

    /// Returns the name of the product at `index`.
    pub fn product_name(&self, index: usize) -> Result<&str, OutOfRange> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns the quantity of the product at `index`.
    pub fn product_quantity(&self, index: usize) -> Result<i64, OutOfRange> {
        self.quantities.get(index).copied()
    }

    /// Replaces the quantity of the product at `index`.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> Result<(), OutOfRange> {
        self.quantities.set(index, quantity).map(|_| ())
    }

    /// Appends a product.
    pub fn add_product(
        &mut self,
        attributes: Series<InventoryAttribute>,
        name: impl Into<String>,
        quantity: i64,
    ) {
        self.attributes.push_row(attributes);
        self.names.push(name.into());
        self.quantities.push(quantity);
    }

    /// Removes the product at `index` from all three parts.
    pub fn remove_product(&mut self, index: usize) -> Result<(), OutOfRange> {
        self.attributes.remove_row(index)?;
        self.names
            .remove_at(index)
            .expect("names aligned with attribute rows");
        self.quantities
            .remove_at(index)
            .expect("quantities aligned with attribute rows");
        Ok(())
    }

    /// Names of products carrying an attribute called `attribute` whose
    /// value lies in `value_range`, with at least `min_quantity` in stock,
    /// sorted per `order`.
    pub fn query(
        &self,
        attribute: &str,
        value_range: RangeInclusive<f64>,
        min_quantity: i64,
        order: SortOrder,
    ) -> Series<String> {
        let mut names: Vec<String> = Vec::new();
        for ((row, name), &quantity) in self
            .attributes
            .iter()
            .zip(self.names.iter())
            .zip(self.quantities.iter())
        {
            if quantity < min_quantity {
                continue;
            }
            let hit = row
                .iter()
                .any(|attr| attr.name == attribute && value_range.contains(&attr.value));
            if hit {
                names.push(name.clone());
            }
        }

        match order {
            SortOrder::Ascending => names.sort(),
            SortOrder::Descending => names.sort_by(|a, b| b.cmp(a)),
        }
        names.into_iter().collect()
    }

    /// Removes later products whose name duplicates an earlier product's.
    /// The first occurrence survives.
    pub fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for (index, name) in self.names.iter().enumerate() {
            if !seen.insert(name.clone()) {
                duplicates.push(index);
            }
        }
        // Back to front so earlier indices stay valid.
        for index in duplicates.into_iter().rev() {
            self.remove_product(index)
                .expect("indices collected from the live range");
        }
    }

    /// Builds a new inventory holding `first`'s products followed by
    /// `second`'s.
    pub fn merge(first: &InventoryManager, second: &InventoryManager) -> InventoryManager {
        let mut merged = first.clone();
        for ((row, name), &quantity) in second
            .attributes
            .iter()
            .zip(second.names.iter())
            .zip(second.quantities.iter())
        {
            merged.add_product(row.clone(), name.clone(), quantity);
        }
        merged
    }

    /// Splits the records proportionally: the first inventory receives the
    /// leading `⌊len × ratio⌋` products (ratio clamped to `[0, 1]`), the
    /// second the remainder.
    pub fn split(&self, ratio: f64) -> (InventoryManager, InventoryManager) {
        let ratio = ratio.clamp(0.0, 1.0);
        let pivot = (self.len() as f64 * ratio) as usize;

        let mut first = InventoryManager::new();
        let mut second = InventoryManager::new();
        for (index, ((row, name), &quantity)) in self
            .attributes
            .iter()
            .zip(self.names.iter())
            .zip(self.quantities.iter())
            .enumerate()
        {
            let target = if index < pivot { &mut first } else { &mut second };
            target.add_product(row.clone(), name.clone(), quantity);
        }
        (first, second)
    }

    /// The attribute rows.
    pub fn attributes(&self) -> &Table<InventoryAttribute> {
        &self.attributes
    }

    /// The product names.
    pub fn product_names(&self) -> &Series<String> {
        &self.names
    }

    /// The product quantities.
    pub fn quantities(&self) -> &Series<i64> {
        &self.quantities
    }
}

impl fmt::Display for InventoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<20}{:<10}Attributes", "Product Name", "Quantity")?;
        for ((row, name), quantity) in self
            .attributes
            .iter()
            .zip(self.names.iter())
            .zip(self.quantities.iter())
        {
            writeln!(f, "{name:<20}{quantity:<10}{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_display_and_equality() {
        let attr = InventoryAttribute::new("weight", 1.5);
        assert_eq!(attr.to_string(), "{weight: 1.5}");
        assert_eq!(attr, InventoryAttribute::new("weight", 1.5));
        assert_ne!(attr, InventoryAttribute::new("weight", 2.0));
        assert_ne!(attr, InventoryAttribute::new("width", 1.5));
    }

    #[test]
    fn add_and_access_stay_aligned() {
        let mut inventory = InventoryManager::new();
        inventory.add_product(
            Series::from_slice(&[InventoryAttribute::new("weight", 1.0)]),
            "bolt",
            10,
        );
        inventory.add_product(Series::new(), "nut", 20);

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.product_name(0).unwrap(), "bolt");
        assert_eq!(inventory.product_quantity(1).unwrap(), 20);
        assert_eq!(inventory.product_attributes(1).unwrap().len(), 0);
        assert!(inventory.product_name(2).is_err());
    }

    #[test]
    fn update_quantity_writes_through() {
        let mut inventory = InventoryManager::new();
        inventory.add_product(Series::new(), "bolt", 10);

        inventory.update_quantity(0, 99).unwrap();
        assert_eq!(inventory.product_quantity(0).unwrap(), 99);
        assert!(inventory.update_quantity(5, 1).is_err());
    }

    #[test]
    fn remove_product_removes_from_all_parts() {
        let mut inventory = InventoryManager::new();
        inventory.add_product(
            Series::from_slice(&[InventoryAttribute::new("a", 1.0)]),
            "first",
            1,
        );
        inventory.add_product(
            Series::from_slice(&[InventoryAttribute::new("b", 2.0)]),
            "second",
            2,
        );

        inventory.remove_product(0).unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.product_name(0).unwrap(), "second");
        assert_eq!(
            *inventory.product_attributes(0).unwrap().get(0).unwrap(),
            InventoryAttribute::new("b", 2.0)
        );
        assert!(inventory.remove_product(1).is_err());
    }

    #[test]
    #[should_panic(expected = "one quantity per product")]
    fn from_parts_rejects_misaligned_lengths() {
        let mut names = Series::new();
        names.push("bolt".to_string());
        let mut table = Table::new();
        table.push_row(Series::new());
        InventoryManager::from_parts(table, names, Series::new());
    }
}
