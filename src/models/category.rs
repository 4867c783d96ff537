use serde::{Deserialize, Serialize};

use super::product::RawProduct;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<RawSubCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubCategory {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<RawProduct>,
}
