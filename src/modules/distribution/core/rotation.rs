/// Round-robin cursor over a roster of `len` agents.
///
/// The value is never mutated in place: `advance` hands back the index to use
/// for the current row together with the rotation for the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    cursor: usize,
    len: usize,
}

impl Rotation {
    /// `None` for an empty roster.
    pub fn start(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { cursor: 0, len })
    }

    pub fn advance(self) -> (usize, Rotation) {
        let next = Rotation {
            cursor: (self.cursor + 1) % self.len,
            len: self.len,
        };
        (self.cursor, next)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
