use crate::error::Result;
use crate::sequence::traits::Length;
use crate::sequence::Sequence;

/// Last-in first-out stack on top of the back of a [`Sequence`].
#[derive(Clone, Debug, Default)]
pub struct Stack<T> {
    data: Sequence<T>,
}

impl <T> Stack<T> {
    #[must_use = "New stacks must serve a purpose!"]
    pub fn new() -> Self {
        Self { data: Sequence::new() }
    }

    /// Creates a stack whose top is the last of `values`.
    #[must_use = "New stacks must serve a purpose!"]
    pub fn from_data<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>
    {
        Self { data: Sequence::from_data(values) }
    }

    pub fn top(&self) -> Result<T>
    where
        T: Clone
    {
        self.data.back()
    }

    pub fn top_ref(&self) -> Result<&T> {
        self.data.back_ref()
    }

    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.data.back_mut()
    }

    /// Elements from bottom to top.
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

    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Removes and tears down the top element.
    pub fn pop(&mut self) -> Result<()> {
        self.data.pop_back()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
    }
}

impl <T> Length for Stack<T> {
    fn length(&self) -> usize {
        self.data.size()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;

    #[test]
    fn last_in_first_out() -> anyhow::Result<()> {
        let mut stack = Stack::from_data(["a", "b"]);
        stack.push("c");

        assert_eq!(stack.top()?, "c");
        stack.pop()?;
        assert_eq!(stack.top()?, "b");
        assert_eq!(stack.size(), 2);

        Ok(())
    }

    #[test]
    fn pop_tears_down_the_top() -> anyhow::Result<()> {
        struct Tracked(Arc<AtomicUsize>);
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }

        let drops = Arc::new(AtomicUsize::new(0));
        let mut stack = Stack::new();
        stack.push(Tracked(drops.clone()));
        stack.push(Tracked(drops.clone()));

        stack.pop()?;
        assert_eq!(drops.load(Ordering::Relaxed), 1);

        stack.clear();
        assert_eq!(drops.load(Ordering::Relaxed), 2);
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));

        Ok(())
    }
}
