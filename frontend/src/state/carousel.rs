use std::rc::Rc;
use yew::Reducible;

/// Cyclic index with a single auto-advance deadline.
///
/// Every move re-arms the deadline, so a manual prev/next restarts the
/// countdown instead of racing the pending timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval_ms: u64,
    deadline: u64,
}

impl Carousel {
    pub fn new(len: usize, interval_ms: u64, now: u64) -> Self {
        Self {
            len,
            index: 0,
            interval_ms,
            deadline: now + interval_ms,
        }
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

    /// When the pending auto-advance is due.
    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    /// Milliseconds from `now` until the deadline, saturating at both ends.
    pub fn delay_from(&self, now: u64) -> u32 {
        u32::try_from(self.deadline.saturating_sub(now)).unwrap_or(u32::MAX)
    }

    pub fn next(&mut self, now: u64) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index + 1 == self.len { 0 } else { self.index + 1 };
        self.rearm(now);
    }

    pub fn prev(&mut self, now: u64) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        self.rearm(now);
    }

    /// Timer callback. A timer armed for an older deadline is stale and
    /// does nothing.
    pub fn tick(&mut self, armed_for: u64, now: u64) -> bool {
        if armed_for != self.deadline || self.is_empty() {
            return false;
        }
        self.next(now);
        true
    }

    fn rearm(&mut self, now: u64) {
        self.deadline = now + self.interval_ms;
    }
}

pub enum CarouselAction {
    Next { at: u64 },
    Prev { at: u64 },
    Tick { armed_for: u64, at: u64 },
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next { at } => next.next(at),
            CarouselAction::Prev { at } => next.prev(at),
            CarouselAction::Tick { armed_for, at } => {
                if !next.tick(armed_for, at) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: u64 = 5_000;

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = Carousel::new(3, INTERVAL, 0);
        let mut seen = Vec::new();
        for _ in 0..3 {
            carousel.next(0);
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut carousel = Carousel::new(3, INTERVAL, 0);
        carousel.prev(0);
        assert_eq!(carousel.index(), 2);
        carousel.prev(0);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn auto_advance_fires_at_deadline() {
        let mut carousel = Carousel::new(3, INTERVAL, 0);
        assert_eq!(carousel.deadline(), 5_000);

        assert!(carousel.tick(5_000, 5_000));
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.deadline(), 10_000);
    }

    #[test]
    fn manual_move_restarts_countdown() {
        let mut carousel = Carousel::new(3, INTERVAL, 0);

        // 4s into the window the user clicks next.
        carousel.next(4_000);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.deadline(), 9_000);

        // The timer armed before the click goes off at 5s and must not advance.
        assert!(!carousel.tick(5_000, 5_000));
        assert_eq!(carousel.index(), 1);

        assert!(carousel.tick(9_000, 9_000));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn timer_after_manual_move_waits_a_full_interval() {
        let mut carousel = Carousel::new(3, INTERVAL, 10_000);
        assert_eq!(carousel.delay_from(10_000), 5_000);

        carousel.next(14_000);
        assert!(carousel.deadline() >= 19_000);
        assert_eq!(carousel.delay_from(14_000), 5_000);
        assert_eq!(carousel.delay_from(20_000), 0);
    }

    #[test]
    fn prev_also_restarts_countdown() {
        let mut carousel = Carousel::new(3, INTERVAL, 0);
        carousel.prev(2_500);
        assert_eq!(carousel.deadline(), 7_500);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0, INTERVAL, 0);
        carousel.next(1);
        carousel.prev(2);
        assert!(!carousel.tick(5_000, 5_000));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn single_item_still_rearms() {
        let mut carousel = Carousel::new(1, INTERVAL, 0);
        carousel.next(1_000);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.deadline(), 6_000);
    }

    #[test]
    fn reducer_ignores_stale_ticks() {
        let carousel = Rc::new(Carousel::new(3, INTERVAL, 0));
        let moved = carousel.reduce(CarouselAction::Next { at: 4_000 });
        let stale = moved.clone().reduce(CarouselAction::Tick { armed_for: 5_000, at: 5_000 });

        assert!(Rc::ptr_eq(&moved, &stale));
        assert_eq!(stale.index(), 1);
    }
}
