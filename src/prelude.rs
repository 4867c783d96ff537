pub use anyhow::{Result, Context};

pub use crate::models::Product;

pub use std::sync::Arc;
