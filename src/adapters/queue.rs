use crate::error::Result;
use crate::sequence::traits::Length;
use crate::sequence::Sequence;

/// First-in first-out queue: elements enter at the back and leave at the front.
#[derive(Clone, Debug, Default)]
pub struct Queue<T> {
    data: Sequence<T>,
}

impl <T> Queue<T> {
    #[must_use = "New queues must serve a purpose!"]
    pub fn new() -> Self {
        Self { data: Sequence::new() }
    }

    #[must_use = "New queues must serve a purpose!"]
    pub fn from_data<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>
    {
        Self { data: Sequence::from_data(values) }
    }

    pub fn front(&self) -> Result<T>
    where
        T: Clone
    {
        self.data.front()
    }

    pub fn front_ref(&self) -> Result<&T> {
        self.data.front_ref()
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.data.front_mut()
    }

    pub fn data(&self) -> &[T] {
        self.data.data()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.data.size()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn push_back(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Removes and tears down the oldest element.
    pub fn pop_front(&mut self) -> Result<()> {
        self.data.pop_front()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
    }
}

impl <T> Length for Queue<T> {
    fn length(&self) -> usize {
        self.data.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn first_in_first_out() -> anyhow::Result<()> {
        let mut queue = Queue::new();
        for i in 0..5 {
            queue.push_back(i);
        }

        for i in 0..5 {
            assert_eq!(queue.front()?, i);
            queue.pop_front()?;
        }

        assert!(queue.is_empty());
        assert_eq!(queue.pop_front(), Err(Error::EmptyContainer));
        assert_eq!(queue.front_ref(), Err(Error::EmptyContainer));

        Ok(())
    }
}
