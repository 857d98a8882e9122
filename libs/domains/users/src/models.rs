use chrono::{DateTime, Utc};
use database::{Lifecycle, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use strum::Display;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Free-form key/value attributes attached to a record
pub type Meta = HashMap<String, Value>;

/// Stored and sent as its integer code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[default]
    NotSpecified = 0,
    Female = 1,
    Male = 2,
}

impl From<Gender> for u8 {
    fn from(gender: Gender) -> Self {
        gender as u8
    }
}

impl TryFrom<u8> for Gender {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Gender::NotSpecified),
            1 => Ok(Gender::Female),
            2 => Ok(Gender::Male),
            other => Err(format!("unknown gender code {other}, expected 0, 1 or 2")),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    /// 0 = not specified, 1 = female, 2 = male
    #[schema(value_type = u8)]
    pub gender: Gender,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lifecycle: Lifecycle,
}

/// Input for creating or replacing a user
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    #[schema(value_type = u8)]
    pub gender: Gender,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meta: Meta,
}

impl User {
    /// A fresh, live user with a new v7 id
    pub fn new(input: NewUser) -> Self {
        Self::with_id(Uuid::now_v7(), input)
    }

    /// The record `input` describes under an existing id
    pub fn with_id(id: Uuid, input: NewUser) -> Self {
        Self {
            id,
            name: input.name,
            last_name: input.last_name,
            gender: input.gender,
            meta: input.meta,
            updated_at: None,
            lifecycle: Lifecycle::Active,
        }
    }
}

impl Record for User {
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
