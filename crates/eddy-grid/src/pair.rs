//! Double-buffered field storage.
//!
//! A [`FieldPair`] holds the current values of one field and a second
//! buffer of the same length. Solver stages read one buffer and write the
//! other; [`FieldPair::swap`] exchanges the roles by swapping the owned
//! `Vec` handles, so no element is ever copied.

/// Current and previous buffers for one field.
///
/// Both buffers always have identical length. Outside a step, `previous`
/// holds scratch or caller-injected source values and carries no meaning
/// for readers.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPair {
    current: Vec<f32>,
    previous: Vec<f32>,
}

impl FieldPair {
    /// Two zero-filled buffers of `len` cells.
    pub fn zeroed(len: usize) -> Self {
        Self {
            current: vec![0.0; len],
            previous: vec![0.0; len],
        }
    }

    /// Cells per buffer.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the buffers hold no cells.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Read the current buffer.
    pub fn current(&self) -> &[f32] {
        &self.current
    }

    /// Mutable access to the current buffer.
    pub fn current_mut(&mut self) -> &mut [f32] {
        &mut self.current
    }

    /// Read the previous buffer.
    pub fn previous(&self) -> &[f32] {
        &self.previous
    }

    /// Mutable access to the previous buffer.
    pub fn previous_mut(&mut self) -> &mut [f32] {
        &mut self.previous
    }

    /// Exchange the roles of the two buffers.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }

    /// Borrow `(current, previous)` mutably at the same time.
    pub fn split_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.current, &mut self.previous)
    }

    /// Zero both buffers.
    pub fn clear(&mut self) {
        self.current.fill(0.0);
        self.previous.fill(0.0);
    }
}
