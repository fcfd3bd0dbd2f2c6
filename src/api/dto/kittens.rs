/*
 * Responsibility
 * - Kittens の request/response DTO
 * - validation (形式チェック) 用の validate()
 * - response には owner / id を含めない
 */
use serde::{Deserialize, Serialize};

use crate::repos::kitten_repo::KittenRow;
use crate::services::ownership::KittenDraft;

const MAX_TEXT_LEN: usize = 100;
const MAX_AGE: i32 = 100;

// age は JSON の整数のみ受け付ける ("3" や 3.5 は deserialize の時点で 400)
#[derive(Debug, Deserialize)]
pub struct CreateKittenRequest {
    pub name: String,
    pub age: i32,
    pub color: String,
}

impl CreateKittenRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.name.chars().count() > MAX_TEXT_LEN {
            return Err("name must be <= 100 chars");
        }
        if !(0..=MAX_AGE).contains(&self.age) {
            return Err("age must be between 0 and 100");
        }
        if self.color.trim().is_empty() {
            return Err("color is required");
        }
        if self.color.chars().count() > MAX_TEXT_LEN {
            return Err("color must be <= 100 chars");
        }

        Ok(())
    }
}

impl From<CreateKittenRequest> for KittenDraft {
    fn from(req: CreateKittenRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            color: req.color,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KittenResponse {
    pub name: String,
    pub age: i32,
    pub color: String,
}

impl From<KittenRow> for KittenResponse {
    fn from(row: KittenRow) -> Self {
        Self {
            name: row.name,
            age: row.age,
            color: row.color,
        }
    }
}
