//!
//! Key/value association used as the storage unit of [`Dictionary`].
//!
//! [`Dictionary`]: crate::Dictionary
//!

use crate::{Error, Result};
use std::any::Any;

///
/// Pair
///
/// A key bound to a value. Fields are public; the pair does not enforce
/// immutability once built.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Pair<K, V>
where
    K: PartialEq + 'static,
    V: PartialEq + 'static,
{
    /// Structural equality against an arbitrary value.
    ///
    /// Anything that is not a `Pair<K, V>` compares unequal. The comparison
    /// goes through [`Any`], so it is only available for `'static` key and
    /// value types; borrowed pairs compare with `==` instead.
    #[must_use]
    pub fn equal(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

///
/// Record
///
/// A loosely shaped key/value object. Either field may be missing; only a
/// record carrying both normalizes into a [`Pair`].
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record<K, V> {
    pub key: Option<K>,
    pub value: Option<V>,
}

impl<K, V> Record<K, V> {
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self {
            key: Some(key),
            value: Some(value),
        }
    }

    #[must_use]
    pub const fn is_pair_shaped(&self) -> bool {
        self.key.is_some() && self.value.is_some()
    }
}

impl<K, V> TryFrom<Record<K, V>> for Pair<K, V> {
    type Error = Error;

    fn try_from(record: Record<K, V>) -> Result<Self> {
        match (record.key, record.value) {
            (Some(key), Some(value)) => Ok(Self::new(key, value)),
            (None, _) => Err(Error::invalid("record is missing its `key` field")),
            (_, None) => Err(Error::invalid("record is missing its `value` field")),
        }
    }
}

impl<K, V> From<Pair<K, V>> for Record<K, V> {
    fn from(pair: Pair<K, V>) -> Self {
        Self::new(pair.key, pair.value)
    }
}

///
/// IntoPair
///
/// Anything a single pair can be built from. Only a [`Record`] can fail.
///

pub trait IntoPair<K, V> {
    fn into_pair(self) -> Result<Pair<K, V>>;
}

impl<K, V> IntoPair<K, V> for Pair<K, V> {
    fn into_pair(self) -> Result<Pair<K, V>> {
        Ok(self)
    }
}

impl<K, V> IntoPair<K, V> for (K, V) {
    fn into_pair(self) -> Result<Pair<K, V>> {
        Ok(self.into())
    }
}

impl<K, V> IntoPair<K, V> for Record<K, V> {
    fn into_pair(self) -> Result<Pair<K, V>> {
        Pair::try_from(self)
    }
}

///
/// TESTS
///
