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

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Ordered; the same product may appear more than once
    pub products_ids: Vec<Uuid>,
    pub date: DateTime<Utc>,
    pub is_payed: bool,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lifecycle: Lifecycle,
}

/// Input for creating an order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: Uuid,
    #[serde(default)]
    pub products_ids: Vec<Uuid>,
    /// Defaults to the time the request was decoded
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_payed: bool,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meta: Meta,
}

impl NewOrder {
    pub fn new(user_id: Uuid, products_ids: Vec<Uuid>) -> Self {
        Self {
            user_id,
            products_ids,
            date: Utc::now(),
            is_payed: false,
            meta: Meta::new(),
        }
    }
}

/// Full replacement of an order; `date` and `isPayed` must be sent
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOrder {
    pub user_id: Uuid,
    #[serde(default)]
    pub products_ids: Vec<Uuid>,
    pub date: DateTime<Utc>,
    pub is_payed: bool,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meta: Meta,
}

impl From<ReplaceOrder> for NewOrder {
    fn from(input: ReplaceOrder) -> Self {
        Self {
            user_id: input.user_id,
            products_ids: input.products_ids,
            date: input.date,
            is_payed: input.is_payed,
            meta: input.meta,
        }
    }
}

impl Order {
    pub fn new(input: NewOrder) -> Self {
        Self::with_id(Uuid::now_v7(), input)
    }

    pub fn with_id(id: Uuid, input: NewOrder) -> Self {
        Self {
            id,
            user_id: input.user_id,
            products_ids: input.products_ids,
            date: input.date,
            is_payed: input.is_payed,
            meta: input.meta,
            updated_at: None,
            lifecycle: Lifecycle::Active,
        }
    }
}

impl Record for Order {
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
