use crate::log::Topic;

///
/// Stack
///
/// LIFO container. Initial values are laid out bottom to top in the order
/// given.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Remove and return the top value; `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Top value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values bottom to top.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Pop every value top to bottom, handing each to `callback` together
    /// with the stack itself.
    pub fn deplete<F>(&mut self, mut callback: F)
    where
        F: FnMut(&Self, T),
    {
        let mut count = 0usize;
        while let Some(value) = self.pop() {
            callback(self, value);
            count += 1;
        }

        crate::log!(Topic::Stack, Debug, "depleted {count} values");
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

///
/// TESTS
///
