//! Newtype tokens for type-safe product references.
//!
//! Use the `define_token!` macro to create string-backed wrappers that prevent
//! accidentally mixing a product ID with a color token or a display name.

/// Errors that can occur when parsing a token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty or only whitespace.
    #[error("{kind} cannot be empty")]
    Empty {
        /// Name of the token type being parsed.
        kind: &'static str,
    },
}

/// Macro to define a type-safe string token.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` (deserialization rejects empty values)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `parse()`, `as_str()`, `into_inner()`
/// - `Display`, `FromStr` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use naked_pineapple_core::define_token;
/// define_token!(SkuCode);
/// define_token!(WarehouseCode);
///
/// let sku = SkuCode::parse("NP-001").unwrap();
/// assert_eq!(sku.as_str(), "NP-001");
/// assert!(WarehouseCode::parse("  ").is_err());
///
/// // These are different types, so this won't compile:
/// // let _: SkuCode = WarehouseCode::parse("W1").unwrap();
/// ```
#[macro_export]
macro_rules! define_token {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse a token, rejecting empty or whitespace-only input.
            ///
            /// # Errors
            ///
            /// Returns [`IdError::Empty`] if the input has no visible characters.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::IdError> {
                if s.trim().is_empty() {
                    return Err($crate::IdError::Empty {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(s.to_owned()))
            }

            /// Returns the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the token and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::IdError;

            fn try_from(s: String) -> ::core::result::Result<Self, Self::Error> {
                if s.trim().is_empty() {
                    return Err($crate::IdError::Empty {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(s))
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> Self {
                token.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalog-supplied identifiers
define_token!(ProductId);
define_token!(Color);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = ProductId::parse("p1").unwrap();
        assert_eq!(id.as_str(), "p1");
        assert_eq!(id.to_string(), "p1");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            ProductId::parse(""),
            Err(IdError::Empty { kind: "ProductId" })
        );
        assert!(Color::parse("   ").is_err());
    }

    #[test]
    fn test_opaque_values_kept_verbatim() {
        // Identifiers are opaque; surrounding whitespace is not normalized.
        let color = Color::parse(" red ").unwrap();
        assert_eq!(color.as_str(), " red ");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::parse("sku-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sku-42\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<Color, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str() {
        let color: Color = "blue".parse().unwrap();
        assert_eq!(color.into_inner(), "blue");
    }
}
