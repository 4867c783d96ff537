use std::time::Duration;

pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_DESCRIPTION: &str = env!("APP_DESCRIPTION");

pub const BUNDLED_CATALOG_PATH: &str = "assets/products.json";
pub const BUNDLED_CATALOG: &str = include_str!("../assets/products.json");

pub const CURRENCY_SYMBOL: &str = "₽";
pub const EMPTY_CATALOG_MESSAGE: &str = "No products found";

/// How long a detail view keeps deriving after its last subscriber left.
pub const DETAIL_GRACE_PERIOD: Duration = Duration::from_secs(5);
