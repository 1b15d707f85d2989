/// Position in a ring of `len` slides. Stepping past either end wraps around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn at(index: usize, len: usize) -> Self {
        let index = index.checked_rem(len).unwrap_or(0);
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }
}

/// At most one open entry; opening another closes the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_both_ways() {
        let first = Carousel::new(5);
        assert_eq!(first.prev().index(), 4);

        let last = Carousel::at(4, 5);
        assert_eq!(last.next().index(), 0);
        assert_eq!(last.prev().index(), 3);
    }

    #[test]
    fn carousel_full_turn_returns_home() {
        let mut carousel = Carousel::at(2, 3);
        for _ in 0..3 {
            carousel = carousel.next();
        }
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let empty = Carousel::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.next().index(), 0);
        assert_eq!(empty.prev().index(), 0);
        assert_eq!(Carousel::at(3, 0).index(), 0);
    }

    #[test]
    fn accordion_keeps_a_single_entry_open() {
        let accordion = Accordion::default().toggle(1);
        assert!(accordion.is_open(1));

        let accordion = accordion.toggle(3);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(3));

        assert_eq!(accordion.toggle(3), Accordion::default());
    }
}
