use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` values in arithmetic progression:
/// v[i] = start + i * step when ascending,
/// v[i] = start - i * step when descending
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    start: f64,
    position: usize,
    // `step` with the sign given by the order
    direction: f64,
    num: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(start: f64, step: f64, num: usize, order: SequentialOrder) -> SequentialGenerator {
        let direction = match order {
            SequentialOrder::Ascending => step,
            SequentialOrder::Descending => -step,
        };
        SequentialGenerator {
            start,
            position: 0,
            direction,
            num,
        }
    }
}

impl Iterator for SequentialGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            None
        } else {
            // Multiply instead of accumulating, so errors don't pile up
            let r = self.start + self.direction * self.position as f64;
            self.position += 1;
            Some(r)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialGenerator {}

impl ExactSizeIterator for SequentialGenerator {}
