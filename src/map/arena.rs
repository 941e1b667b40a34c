/// Handle to one weight buffer inside a [`WeightArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BufferId(usize);

impl BufferId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Allocation counters for a table's weight storage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ArenaStats {
    /// Distinct weight buffers allocated.
    pub buffers: usize,
    /// Weights per buffer.
    pub window_len: usize,
    /// Total bytes of weight storage.
    pub bytes: usize,
}

/// Fixed-width weight storage: one contiguous block carved into equally sized
/// buffers. Buffers are only ever appended, and all of them are released
/// together when the arena drops.
#[derive(Debug)]
pub(crate) struct WeightArena {
    window_len: usize,
    data: Vec<f32>,
}

impl WeightArena {
    /// Arena for buffers of `window_len` weights with room for `buffers` of them.
    pub(crate) fn with_capacity(window_len: usize, buffers: usize) -> Self {
        Self {
            window_len,
            data: Vec::with_capacity(window_len.saturating_mul(buffers)),
        }
    }

    /// Append a zeroed buffer and hand it out for filling.
    pub(crate) fn allocate(&mut self) -> (BufferId, &mut [f32]) {
        let id = BufferId(self.buffer_count());
        let begin = self.data.len();
        self.data.resize(begin + self.window_len, 0.0);
        (id, &mut self.data[begin..])
    }

    pub(crate) fn get(&self, id: BufferId) -> &[f32] {
        let begin = id.index() * self.window_len;
        &self.data[begin..begin + self.window_len]
    }

    pub(crate) fn buffer_count(&self) -> usize {
        if self.window_len == 0 {
            0
        } else {
            self.data.len() / self.window_len
        }
    }

    pub(crate) fn stats(&self) -> ArenaStats {
        ArenaStats {
            buffers: self.buffer_count(),
            window_len: self.window_len,
            bytes: self.data.len() * std::mem::size_of::<f32>(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/map/arena.rs"]
mod tests;
