use serde::{Deserialize, Serialize};

/// Declares a transparent integer identifier for one entity table.
///
/// Each table gets its own type so a product id can never be joined
/// against a category id by accident.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from its raw value.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw value.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a customer row.
    CustomerId
);
entity_id!(
    /// Identifier of an order row.
    OrderId
);
entity_id!(
    /// Identifier of a product row.
    ProductId
);
entity_id!(
    /// Identifier of a product category.
    CategoryId
);
entity_id!(
    /// Identifier of a supplier.
    SupplierId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_preserves_raw_value() {
        let id = CustomerId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(ProductId::from(7), ProductId::new(7));
    }

    #[test]
    fn id_serializes_as_plain_number() {
        let json = serde_json::to_string(&OrderId::new(1001)).unwrap();
        assert_eq!(json, "1001");

        let id: SupplierId = serde_json::from_str("12").unwrap();
        assert_eq!(id, SupplierId::new(12));
    }

    #[test]
    fn id_display() {
        assert_eq!(CategoryId::new(3).to_string(), "3");
    }
}
