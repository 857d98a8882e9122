use chrono::{DateTime, Utc};
use database::{Lifecycle, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Free-form key/value attributes attached to a record
pub type Meta = HashMap<String, Value>;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Image URLs, in display order
    pub images: Vec<String>,
    pub price: f64,
    pub color: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lifecycle: Lifecycle,
}

/// Input for creating or replacing a product
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meta: Meta,
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        Self::with_id(Uuid::now_v7(), input)
    }

    pub fn with_id(id: Uuid, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            images: input.images,
            price: input.price,
            color: input.color,
            meta: input.meta,
            updated_at: None,
            lifecycle: Lifecycle::Active,
        }
    }
}

impl Record for Product {
    fn id(&self) -> Uuid {
        self.id
    }

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        self.lifecycle = lifecycle;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}
