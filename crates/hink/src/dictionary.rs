//!
//! Insertion-ordered dictionary of unique-keyed [`Pair`]s.
//!
//! Lookups are linear scans over the ordered pairs, so keys only need
//! `PartialEq`. Construction accepts a mixture of argument shapes (see
//! [`Entry`]) and normalizes every one of them into a `Pair` before anything
//! is stored.
//!

use crate::{
    Error, Pair, Record, Result,
    log::Topic,
    pair::IntoPair,
};
use std::borrow::Borrow;

///
/// Entry
///
/// One constructor argument: a ready-made pair, a loose key/value record, or
/// a list of either. Lists nest one level deep only.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry<K, V> {
    Pair(Pair<K, V>),
    Record(Record<K, V>),
    List(Vec<Self>),
}

impl<K, V> Entry<K, V> {
    // depth 0 is a top-level argument, depth 1 an item inside a list
    fn normalize_into(self, depth: usize, out: &mut Vec<Pair<K, V>>) -> Result<()> {
        match self {
            Self::Pair(pair) => out.push(pair),
            Self::Record(record) => out.push(Pair::try_from(record)?),
            Self::List(_) if depth > 0 => {
                return Err(Error::invalid("lists may only nest one level deep"));
            }
            Self::List(items) => {
                for item in items {
                    item.normalize_into(depth + 1, out)?;
                }
            }
        }

        Ok(())
    }
}

impl<K, V> From<Pair<K, V>> for Entry<K, V> {
    fn from(pair: Pair<K, V>) -> Self {
        Self::Pair(pair)
    }
}

impl<K, V> From<Record<K, V>> for Entry<K, V> {
    fn from(record: Record<K, V>) -> Self {
        Self::Record(record)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from(kv: (K, V)) -> Self {
        Self::Pair(kv.into())
    }
}

impl<K, V, T> From<Vec<T>> for Entry<K, V>
where
    T: Into<Self>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

///
/// Dictionary
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dictionary<K, V> {
    pairs: Vec<Pair<K, V>>,
}

impl<K, V> Dictionary<K, V> {
    #[must_use]
    pub const fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Number of pairs currently held.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pairs.iter().map(|pair| &pair.key)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.pairs.iter().map(|pair| &pair.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair<K, V>> {
        self.pairs.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Pair<K, V>] {
        &self.pairs
    }
}

impl<K: PartialEq, V> Dictionary<K, V> {
    /// Build a dictionary from any mixture of argument shapes.
    ///
    /// Every argument is validated before anything is stored, so a malformed
    /// argument anywhere fails the whole construction.
    pub fn new<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Entry<K, V>>,
    {
        let mut pairs = Vec::new();
        for arg in args {
            let entry: Entry<K, V> = arg.into();
            if let Err(err) = entry.normalize_into(0, &mut pairs) {
                crate::log!(Topic::Dictionary, Warn, "rejected constructor argument: {err}");
                return Err(err);
            }
        }

        let mut dict = Self::empty();
        for pair in pairs {
            dict.add(pair)?;
        }

        Ok(dict)
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.pairs
            .iter()
            .position(|pair| Borrow::<Q>::borrow(&pair.key) == key)
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Value stored under `key`, or `None` when absent.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).map(|i| &self.pairs[i].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).map(|i| &mut self.pairs[i].value)
    }

    /// Overwrite the value of an existing key and return the old value.
    ///
    /// Unknown keys are left alone: nothing is inserted and `None` comes back.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let slot = self.get_mut(&key)?;

        Some(std::mem::replace(slot, value))
    }

    /// [`set`](Self::set) for anything pair-shaped; an incomplete record is
    /// rejected before the dictionary is touched.
    pub fn set_pair(&mut self, pair: impl IntoPair<K, V>) -> Result<Option<V>> {
        let Pair { key, value } = pair.into_pair()?;

        Ok(self.set(key, value))
    }

    /// Overwrite the value of `key`, or append a new pair when it is absent.
    ///
    /// Returns the replaced value, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.pairs.push(Pair::new(key, value));
                None
            }
        }
    }

    pub fn put_pair(&mut self, pair: impl IntoPair<K, V>) -> Result<Option<V>> {
        let Pair { key, value } = pair.into_pair()?;

        Ok(self.put(key, value))
    }

    /// Append a pair whose key is not present yet.
    pub fn add(&mut self, pair: impl IntoPair<K, V>) -> Result<()> {
        let pair = pair.into_pair()?;
        if self.contains_key(&pair.key) {
            crate::log!(Topic::Dictionary, Debug, "add refused a duplicate key");
            return Err(Error::DuplicateKey);
        }

        self.pairs.push(pair);

        Ok(())
    }

    /// Remove the pair stored under `key`, keeping the order of the rest.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Pair<K, V>>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).map(|i| self.pairs.remove(i))
    }

    /// Remove the pair stored under `key` and hand it to `callback`.
    ///
    /// The callback runs only when a pair was removed. Returns whether it ran.
    pub fn remove_with<Q, F>(&mut self, key: &Q, callback: F) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        F: FnOnce(Pair<K, V>),
    {
        match self.remove(key) {
            Some(pair) => {
                callback(pair);
                true
            }
            None => false,
        }
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: PartialEq, V> TryFrom<Vec<Pair<K, V>>> for Dictionary<K, V> {
    type Error = Error;

    fn try_from(pairs: Vec<Pair<K, V>>) -> Result<Self> {
        Self::new(pairs)
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = Pair<K, V>;
    type IntoIter = std::vec::IntoIter<Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = &'a Pair<K, V>;
    type IntoIter = std::slice::Iter<'a, Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

///
/// TESTS
///
