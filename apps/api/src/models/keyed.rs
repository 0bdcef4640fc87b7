//! Closed, string-keyed enums.
//!
//! Every multiple-choice value in this service (form options, catalog
//! categories, tiers, icons) is a plain `Copy` enum that derives its serde
//! representation with `#[serde(rename_all = "kebab-case")]`. `impl_keyed!`
//! adds the `as_str`-style key table used by query-string selectors and by
//! [`lenient`], which cannot go through serde.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// A closed set of values addressed by a stable string key.
pub trait Keyed: Copy + Eq + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.key() == key)
    }
}

/// Implements [`Keyed`] and `Display` for an enum that already derives serde.
///
/// Keys must match the derived wire names; each module's tests check that
/// with [`assert_keys_match_serde`].
macro_rules! impl_keyed {
    ($name:ident { $( $variant:ident => $key:literal ),+ $(,)? }) => {
        impl $crate::models::keyed::Keyed for $name {
            const VARIANTS: &'static [Self] = &[$( Self::$variant ),+];

            fn key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::models::keyed::Keyed::key(*self))
            }
        }
    };
}

pub(crate) use impl_keyed;

/// Deserializes a keyed enum, falling back to its default for anything that
/// is not a known key.
///
/// Used on generator form fields: an unexpected option, a `null` or a value of
/// the wrong type must degrade to the default phrase, never fail the request.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Keyed + Default,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let known = match &raw {
        None | Some(Value::Null) => return Ok(T::default()),
        Some(Value::String(key)) => T::from_key(key),
        Some(_) => None,
    };

    Ok(known.unwrap_or_else(|| {
        let fallback = T::default();
        if let Some(value) = &raw {
            warn!(
                %value,
                fallback = fallback.key(),
                "Unrecognised option value, using default"
            );
        }
        fallback
    }))
}

/// Asserts that every variant serializes to its key and parses back from it.
#[cfg(test)]
pub fn assert_keys_match_serde<T>()
where
    T: Keyed + std::fmt::Debug + serde::Serialize + serde::de::DeserializeOwned,
{
    for v in T::VARIANTS {
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json, Value::String(v.key().to_string()), "{v:?}");
        assert_eq!(serde_json::from_value::<T>(json).unwrap(), *v);
    }
}
