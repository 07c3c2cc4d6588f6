use super::hand::Hand;

/// HandIterator walks all 169 canonical starting hands in grid-index order,
/// AA first and 22 last. the order is fixed by the index encoding, so every
/// walk is deterministic. obtained from Hand::exhaust().
#[derive(Default)]
pub struct HandIterator {
    next: u8,
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.next < Hand::N {
            let hand = Hand::at(self.next);
            self.next += 1;
            Some(hand)
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (Hand::N - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HandIterator {}
