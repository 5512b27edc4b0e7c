//! Reusable successor buffer handed to [`Space::successors`].
//!
//! [`Space::successors`]: crate::Space::successors

/// Initial capacity used by the engine's own buffer.
pub const DEFAULT_CAPACITY: usize = 8;

/// Growable list of states produced by one expansion.
///
/// The engine clears the buffer after every expansion but keeps its backing
/// storage, so after warm-up enumerating successors does not allocate.
#[derive(Debug, Clone)]
pub struct Successors<S> {
    buf: Vec<S>,
}

impl<S> Default for Successors<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Successors<S> {
    /// Create an empty buffer with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer able to hold `capacity` states before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append a successor state.
    ///
    /// When full, capacity grows to `1.5 * capacity + 1`.
    pub fn push(&mut self, state: S) {
        if self.buf.len() == self.buf.capacity() {
            self.buf.reserve_exact(self.buf.capacity() / 2 + 1);
        }
        self.buf.push(state);
    }

    /// Remove and return the last state.
    pub fn pop(&mut self) -> Option<S> {
        self.buf.pop()
    }

    /// The last state pushed.
    pub fn peek(&self) -> Option<&S> {
        self.buf.last()
    }

    /// The state at `index`, in push order.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.buf.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of states the buffer holds before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reset the logical size to zero. Backing storage is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Shorten the buffer to `len` states. Has no effect if it is already
    /// shorter.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Iterate the states in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.buf.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.buf
    }

    /// Remove every state, yielding them in push order. Backing storage is
    /// kept.
    pub fn drain(&mut self) -> std::vec::Drain<'_, S> {
        self.buf.drain(..)
    }
}

impl<S> Extend<S> for Successors<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.push(s);
        }
    }
}

impl<'a, S> IntoIterator for &'a Successors<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
