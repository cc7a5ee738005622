/// Previous/next browsing over a fixed, non-empty content list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `len` of zero is treated as one so the index stays valid.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves by `delta` positions, wrapping in both directions.
    pub fn step(&self, delta: isize) -> Self {
        let len = self.len as isize;
        Self {
            index: (self.index as isize + delta.rem_euclid(len)).rem_euclid(len) as usize,
            len: self.len,
        }
    }

    pub fn next(&self) -> Self {
        self.step(1)
    }

    pub fn previous(&self) -> Self {
        self.step(-1)
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
