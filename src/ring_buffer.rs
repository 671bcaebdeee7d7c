use crate::error::{Error, Result};
use crate::summary::Summary;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

/// Fixed-capacity ring buffer. Oldest entry is overwritten when full.
///
/// The buffer always holds exactly `capacity` values. Slots that were never
/// written hold `T::default()`. Logical index 0 is the oldest retained value
/// and `capacity - 1` the newest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBuffer<T> {
    data: Vec<T>,
    /// Physical slot that receives the next push, i.e. the oldest value.
    head: usize,
}

impl<T: Default + Clone> RingBuffer<T> {
    pub fn new(cap: usize) -> Result<Self> {
        if cap == 0 {
            log::debug!("rejecting ring buffer with zero capacity");
            return Err(Error::InvalidCapacity { capacity: cap });
        }
        log::debug!("ring buffer created with capacity {}", cap);
        Ok(Self { data: vec![T::default(); cap], head: 0 })
    }

    /// Reset every slot to `T::default()` and rewind the cursor.
    pub fn clear(&mut self) {
        self.data.fill(T::default());
        self.head = 0;
        log::trace!("ring buffer of capacity {} cleared", self.data.len());
    }

    /// Logical-order copy of the contents, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> RingBuffer<T> {
    pub fn capacity(&self) -> usize { self.data.len() }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn window_size(&self) -> usize { self.data.len() }

    /// Never true: a ring buffer always has `capacity` live slots.
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Overwrite the oldest slot with `val`.
    pub fn push_back(&mut self, val: T) {
        self.data[self.head] = val;
        self.head = (self.head + 1) % self.data.len();
    }

    pub fn append(&mut self, val: T) {
        self.push_back(val);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.slot(index)?;
        Ok(&self.data[slot])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.slot(index)?;
        Ok(&mut self.data[slot])
    }

    /// Overwrite a logical slot in place. Eviction order is unchanged.
    pub fn set(&mut self, index: usize, val: T) -> Result<()> {
        *self.get_mut(index)? = val;
        Ok(())
    }

    /// Oldest retained value.
    pub fn first(&self) -> &T {
        &self.data[self.head]
    }

    /// Most recently pushed value.
    pub fn last(&self) -> &T {
        let cap = self.data.len();
        &self.data[(self.head + cap - 1) % cap]
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { buf: self, front: 0, back: self.data.len() }
    }

    fn slot(&self, index: usize) -> Result<usize> {
        let cap = self.data.len();
        if index >= cap {
            log::debug!("index {} rejected (capacity {})", index, cap);
            return Err(Error::IndexOutOfRange { index, capacity: cap });
        }
        Ok((self.head + index) % cap)
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(v)  => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(v)  => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push_back(val);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Summary::default().render(self))
    }
}

// ── Serialization ─────────────────────────────────────────────────────

struct Values<'a, T>(&'a RingBuffer<T>);

impl<T: Serialize> Serialize for Values<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RingBuffer", 2)?;
        s.serialize_field("capacity", &self.capacity())?;
        s.serialize_field("values", &Values(self))?;
        s.end()
    }
}

// ── Iteration ─────────────────────────────────────────────────────────

/// Logical-order iterator, oldest to newest. Created by [`RingBuffer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    buf: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    fn at(&self, logical: usize) -> &'a T {
        let cap = self.buf.data.len();
        &self.buf.data[(self.buf.head + logical) % cap]
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.at(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
