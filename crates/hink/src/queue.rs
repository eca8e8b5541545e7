use crate::log::Topic;
use std::collections::VecDeque;

///
/// Queue
///
/// FIFO container. Initial values are laid out front to back in the order
/// given.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Queue<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Append `value` at the back.
    pub fn enq(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Remove and return the front value; `None` on an empty queue.
    pub fn deq(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Backing storage, front first.
    #[must_use]
    pub const fn data(&self) -> &VecDeque<T> {
        &self.data
    }

    /// Values front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.data.iter()
    }

    /// Dequeue every value front to back, handing each to `callback`
    /// together with the queue itself.
    pub fn deplete<F>(&mut self, mut callback: F)
    where
        F: FnMut(&Self, T),
    {
        let mut count = 0usize;
        while let Some(value) = self.deq() {
            callback(self, value);
            count += 1;
        }

        crate::log!(Topic::Queue, Debug, "depleted {count} values");
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data: data.into() }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [&str; 8] = ["{a:123}", "[3,2,1]", "1", "2", "3", "a", "b", "c"];

    fn drain_and_check(expected: &[&str], queue: &mut Queue<&str>) {
        for want in expected {
            assert_eq!(queue.deq(), Some(*want));
        }
        assert_eq!(queue.deq(), None);
    }

    #[test]
    fn builds_from_sequence_or_values() {
        let mut q = Queue::from(DATA.to_vec());
        drain_and_check(&DATA, &mut q);

        let mut q: Queue<_> = DATA[..3].iter().copied().collect();
        drain_and_check(&DATA[..3], &mut q);

        assert!(Queue::<u8>::new().is_empty());
    }

    #[test]
    fn deq_removes_the_front() {
        let mut q = Queue::from(DATA.to_vec());
        assert_eq!(q.peek(), Some(&DATA[0]));
        assert_eq!(q.deq(), Some(DATA[0]));
        assert_eq!(q.peek(), Some(&DATA[1]));
        assert_eq!(q.len(), DATA.len() - 1);
    }

    #[test]
    fn enq_appends_at_the_back() {
        let mut q = Queue::new();
        assert_eq!(q.peek(), None);

        q.enq(DATA[0]);
        q.enq(DATA[1]);
        assert_eq!(q.peek(), Some(&DATA[0]));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), DATA[..2]);
    }

    #[test]
    fn data_exposes_storage_front_first() {
        let mut q = Queue::from(DATA[..3].to_vec());
        q.deq();
        q.enq(DATA[3]);

        assert_eq!(q.data(), &VecDeque::from(DATA[1..4].to_vec()));
        assert_eq!(q.data().front(), q.peek());
    }

    #[test]
    fn deplete_visits_front_to_back() {
        let mut q = Queue::from(DATA.to_vec());
        let mut seen = Vec::new();

        q.deplete(|queue, value| {
            assert_eq!(queue.len(), DATA.len() - seen.len() - 1);
            seen.push(value);
        });

        assert_eq!(seen, DATA);
        assert!(q.is_empty());
    }
}
