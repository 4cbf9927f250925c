//! Stock/inventory item domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScolarisResult;
use crate::resource::{Resource, TenantPatch};
use crate::validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub id: Uuid,
    pub school_id: Uuid,
    pub item_name: String,
    /// Category label the item is filed under.
    pub category: String,
    pub supplier: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub purchase_date: DateTime<Utc>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStockItem {
    pub school_id: Uuid,
    pub item_name: String,
    pub category: String,
    pub supplier: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub purchase_date: DateTime<Utc>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateStockItem {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub quantity: Option<u32>,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStockItemPayload {
    pub school_id: Option<String>,
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub quantity: Option<i64>,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStockItemPayload {
    pub school_id: Option<String>,
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub quantity: Option<i64>,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<String>,
    pub description: Option<String>,
}

impl Resource for StockItem {
    const ENTITY: &'static str = "stock item";

    type Create = CreateStockItem;
    type Update = UpdateStockItem;
    type CreatePayload = CreateStockItemPayload;
    type UpdatePayload = UpdateStockItemPayload;

    fn validate_create(payload: Self::CreatePayload) -> ScolarisResult<CreateStockItem> {
        let item_name = validate::required_text("item_name", payload.item_name)?;
        let category = validate::required_text("category", payload.category)?;
        let supplier = validate::required_text("supplier", payload.supplier)?;
        let quantity = validate::non_negative_int("quantity", payload.quantity)?;
        let purchase_price = validate::non_negative_number("purchase_price", payload.purchase_price)?;
        let purchase_date = validate::datetime("purchase_date", payload.purchase_date)?;
        let description = validate::optional_text(payload.description);
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(CreateStockItem {
            school_id,
            item_name,
            category,
            supplier,
            quantity,
            purchase_price,
            purchase_date,
            description,
        })
    }

    fn validate_update(
        payload: Self::UpdatePayload,
    ) -> ScolarisResult<TenantPatch<UpdateStockItem>> {
        let school_id = validate::tenant_ref("school_id", payload.school_id)?;
        Ok(TenantPatch {
            school_id,
            patch: UpdateStockItem {
                item_name: validate::patch_text("item_name", payload.item_name)?,
                category: validate::patch_text("category", payload.category)?,
                supplier: validate::patch_text("supplier", payload.supplier)?,
                quantity: validate::patch_non_negative_int("quantity", payload.quantity)?,
                purchase_price: validate::patch_non_negative_number(
                    "purchase_price",
                    payload.purchase_price,
                )?,
                purchase_date: validate::patch_datetime("purchase_date", payload.purchase_date)?,
                description: validate::patch_text("description", payload.description)?,
            },
        })
    }
}
