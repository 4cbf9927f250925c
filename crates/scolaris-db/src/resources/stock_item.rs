//! Store descriptor for stock items.

use chrono::{DateTime, Utc};
use scolaris_core::models::stock_item::{CreateStockItem, StockItem, UpdateStockItem};
use surrealdb::Connection;
use surrealdb::method::Query;
use surrealdb_types::SurrealValue;

use crate::error::DbError;
use crate::store::{SurrealResource, UniqueIndex, parse_uuid};

#[derive(Debug, SurrealValue)]
pub struct StockItemRow {
    record_id: String,
    school_id: String,
    item_name: String,
    category: String,
    supplier: String,
    quantity: u32,
    purchase_price: f64,
    purchase_date: DateTime<Utc>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SurrealResource for StockItem {
    const TABLE: &'static str = "stock_item";
    const UNIQUE: &'static [UniqueIndex] = &[];
    const CREATE_SET: &'static str = "school_id = $school_id, item_name = $item_name, \
         category = $category, supplier = $supplier, quantity = $quantity, \
         purchase_price = $purchase_price, purchase_date = $purchase_date, \
         description = $description";

    type Row = StockItemRow;

    fn bind_create<'r, C: Connection>(query: Query<'r, C>, input: CreateStockItem) -> Query<'r, C> {
        query
            .bind(("school_id", input.school_id.to_string()))
            .bind(("item_name", input.item_name))
            .bind(("category", input.category))
            .bind(("supplier", input.supplier))
            .bind(("quantity", input.quantity))
            .bind(("purchase_price", input.purchase_price))
            .bind(("purchase_date", input.purchase_date))
            .bind(("description", input.description))
    }

    fn update_sets(input: &UpdateStockItem) -> Vec<&'static str> {
        let mut sets = Vec::new();
        if input.item_name.is_some() {
            sets.push("item_name = $item_name");
        }
        if input.category.is_some() {
            sets.push("category = $category");
        }
        if input.supplier.is_some() {
            sets.push("supplier = $supplier");
        }
        if input.quantity.is_some() {
            sets.push("quantity = $quantity");
        }
        if input.purchase_price.is_some() {
            sets.push("purchase_price = $purchase_price");
        }
        if input.purchase_date.is_some() {
            sets.push("purchase_date = $purchase_date");
        }
        if input.description.is_some() {
            sets.push("description = $description");
        }
        sets
    }

    fn bind_update<'r, C: Connection>(
        mut query: Query<'r, C>,
        input: UpdateStockItem,
    ) -> Query<'r, C> {
        if let Some(item_name) = input.item_name {
            query = query.bind(("item_name", item_name));
        }
        if let Some(category) = input.category {
            query = query.bind(("category", category));
        }
        if let Some(supplier) = input.supplier {
            query = query.bind(("supplier", supplier));
        }
        if let Some(quantity) = input.quantity {
            query = query.bind(("quantity", quantity));
        }
        if let Some(purchase_price) = input.purchase_price {
            query = query.bind(("purchase_price", purchase_price));
        }
        if let Some(purchase_date) = input.purchase_date {
            query = query.bind(("purchase_date", purchase_date));
        }
        if let Some(description) = input.description {
            query = query.bind(("description", description));
        }
        query
    }

    fn from_row(row: StockItemRow) -> Result<StockItem, DbError> {
        Ok(StockItem {
            id: parse_uuid("record", &row.record_id)?,
            school_id: parse_uuid("school", &row.school_id)?,
            item_name: row.item_name,
            category: row.category,
            supplier: row.supplier,
            quantity: row.quantity,
            purchase_price: row.purchase_price,
            purchase_date: row.purchase_date,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
