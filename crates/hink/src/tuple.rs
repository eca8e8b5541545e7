//!
//! Fixed-capacity, incrementally fillable ordered container.
//!

use crate::{Error, Result, log::Topic};

///
/// Tuple
///
/// Always holds exactly `limit` slots. `add` fills the next unused slot
/// (tracked by a fill cursor); `put` overwrites any slot in `0..limit`
/// without moving the cursor.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tuple<T> {
    limit: usize,
    data: Vec<Option<T>>,
    filled: usize,
}

impl<T> Tuple<T> {
    /// Build a tuple of `limit` slots, filling the leading ones from `values`.
    pub fn new<I>(limit: usize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        if limit == 0 {
            crate::log!(Topic::Tuple, Warn, "rejected tuple limit 0");
            return Err(Error::invalid("tuple limit must be a positive integer"));
        }

        let mut tuple = Self {
            limit,
            data: std::iter::repeat_with(|| None).take(limit).collect(),
            filled: 0,
        };
        for value in values {
            tuple.add(value)?;
        }

        Ok(tuple)
    }

    /// Build a tuple with every slot unused.
    pub fn with_limit(limit: usize) -> Result<Self> {
        Self::new(limit, std::iter::empty())
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Every slot, used or not; the length always equals `limit`.
    #[must_use]
    pub fn data(&self) -> &[Option<T>] {
        &self.data
    }

    /// Position of the fill cursor: one past the slot the last `add` used.
    #[must_use]
    pub const fn filled(&self) -> usize {
        self.filled
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.next_free().is_none()
    }

    // slots before the cursor are always occupied, so the scan starts there
    fn next_free(&self) -> Option<usize> {
        self.data[self.filled..]
            .iter()
            .position(Option::is_none)
            .map(|i| self.filled + i)
    }

    const fn check_index(&self, index: usize) -> Result<()> {
        if index < self.limit {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                limit: self.limit,
            })
        }
    }

    /// Value at `index`; `Ok(None)` for a slot that was never filled.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.check_index(index)?;

        Ok(self.data[index].as_ref())
    }

    /// Store `value` in the first unused slot, skipping slots set by `put`.
    pub fn add(&mut self, value: T) -> Result<()> {
        let Some(index) = self.next_free() else {
            crate::log!(Topic::Tuple, Debug, "add past limit {}", self.limit);
            return Err(Error::CapacityExceeded { limit: self.limit });
        };

        self.data[index] = Some(value);
        self.filled = index + 1;

        Ok(())
    }

    /// Overwrite the slot at `index`, returning what it held before.
    pub fn put(&mut self, index: usize, value: T) -> Result<Option<T>> {
        self.check_index(index)?;

        Ok(self.data[index].replace(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.data.iter().map(Option::as_ref)
    }
}

///
/// TESTS
///
