use crate::error::Result;
use crate::sequence::traits::Length;
use crate::sequence::Sequence;

/// Double-ended queue: access, insertion and removal at both ends.
#[derive(Clone, Debug, Default)]
pub struct Deque<T> {
    data: Sequence<T>,
}

impl <T> Deque<T> {
    #[must_use = "New deques must serve a purpose!"]
    pub fn new() -> Self {
        Self { data: Sequence::new() }
    }

    #[must_use = "New deques must serve a purpose!"]
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

    pub fn back(&self) -> Result<T>
    where
        T: Clone
    {
        self.data.back()
    }

    pub fn back_ref(&self) -> Result<&T> {
        self.data.back_ref()
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.data.back_mut()
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

    pub fn push_front(&mut self, value: T) {
        self.data.push_front(value);
    }

    pub fn pop_back(&mut self) -> Result<()> {
        self.data.pop_back()
    }

    pub fn pop_front(&mut self) -> Result<()> {
        self.data.pop_front()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
    }
}

impl <T> Length for Deque<T> {
    fn length(&self) -> usize {
        self.data.size()
    }
}
