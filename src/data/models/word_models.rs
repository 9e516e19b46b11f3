use diesel::{AsChangeset, Insertable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::words;

fn default_difficulty() -> i32 {
    3
}

/// Request payload and row for adding a word to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Insertable, AsChangeset)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = words)]
#[diesel(primary_key(word_id))]
#[diesel(treat_none_as_null = true)]
pub struct NewWord {
    #[serde(rename = "id")]
    #[validate(length(min = 1, message = "Word id is required"))]
    pub word_id: String,
    #[validate(length(min = 1, message = "Language id is required"))]
    pub language_id: String,
    #[validate(length(min = 1, message = "Word text is required"))]
    pub text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default = "default_difficulty")]
    #[validate(range(min = 1, max = 5, message = "Difficulty must be between 1 and 5"))]
    pub difficulty: i32,
}
