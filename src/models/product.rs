use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
}

macro_rules! define_images {
    ($(($variant:ident, $resource:literal)),* $(,)?) => {
        /// Placeholder artwork shown for a product. The presentation layer
        /// resolves the resource name to an actual drawable.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ImageRef {
            $($variant,)*
        }

        impl ImageRef {
            pub const COUNT: usize = count_items!($($variant)*);

            #[must_use]
            pub const fn resource(&self) -> &'static str {
                match self {
                    $(ImageRef::$variant => $resource,)*
                }
            }

            #[must_use]
            pub const fn all() -> &'static [Self; Self::COUNT] {
                &[$(ImageRef::$variant,)*]
            }
        }

        impl std::fmt::Display for ImageRef {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{resource}", resource = self.resource())
            }
        }
    };
}

macro_rules! count_items {
    () => { 0 };
    ($head:tt $($tail:tt)*) => { 1 + count_items!($($tail)*) };
}

define_images! {
    (First, "first"),
    (Second, "second"),
    (Third, "third")
}

impl ImageRef {

    /// Same id, same picture: the pool slot is the id modulo the pool size.
    #[must_use]
    pub fn for_id(id: i64) -> Self {
        let pool = Self::all();
        let len = i64::try_from(pool.len()).unwrap_or(i64::MAX);
        let slot = usize::try_from(id.rem_euclid(len)).unwrap_or_default();
        pool[slot]
    }

}

/// A product as the rest of the application sees it, after flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub display_name: String,
    pub formatted_price: String,
    pub image: ImageRef,
    pub description: Option<String>,
}
