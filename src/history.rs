/// Linear undo/redo over full snapshots.
///
/// `entries[index]` is always the current state and `entries` is never empty.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    index: usize,
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            limit: None,
        }
    }

    /// Keeps at most `limit` snapshots (at least one), dropping the oldest.
    pub fn with_limit(initial: T, limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|limit| limit.max(1)),
            ..Self::new(initial)
        }
    }

    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// New undo step. Anything that could still be redone is discarded.
    pub fn commit(&mut self, next: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(next);
        self.index += 1;

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
                self.index -= excess;
            }
        }
    }

    /// Replaces the current snapshot without adding an undo step.
    pub fn update(&mut self, next: T) {
        self.entries[self.index] = next;
    }

    pub fn set(&mut self, next: T, overwrite: bool) {
        if overwrite {
            self.update(next);
        } else {
            self.commit(next);
        }
    }

    /// Steps back one snapshot; returns false at the oldest one.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one snapshot; returns false at the newest one.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.index += 1;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
