use std::collections::HashSet;
use std::hash::Hash;

use crate::config;

/// Host capability that watches regions for viewport intersection.
pub trait Viewport<R> {
    /// Starts watching `region`. Returns `false` when the region is not
    /// mounted and cannot be watched.
    fn observe(&self, region: &R) -> bool;
    fn unobserve(&self, region: &R);
}

/// One-shot fade-in policy: a region becomes visible the first time its
/// intersection ratio reaches the threshold and never goes back.
#[derive(Debug, Clone)]
pub struct RevealTracker<R> {
    threshold: f64,
    registered: bool,
    watching: HashSet<R>,
    visible: HashSet<R>,
}

impl<R> RevealTracker<R>
where
    R: Copy + Eq + Hash,
{
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            registered: false,
            watching: HashSet::new(),
            visible: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Watches every region the viewport can resolve. Only the first call
    /// registers anything; regions mounted later are not picked up.
    pub fn register<I, V>(&mut self, regions: I, viewport: &V) -> usize
    where
        I: IntoIterator<Item = R>,
        V: Viewport<R>,
    {
        if self.registered {
            return 0;
        }
        self.registered = true;

        for region in regions {
            if self.visible.contains(&region) || self.watching.contains(&region) {
                continue;
            }
            if viewport.observe(&region) {
                self.watching.insert(region);
            }
        }
        self.watching.len()
    }

    /// Feeds one intersection report. Returns `true` when this report
    /// revealed the region.
    pub fn report<V>(&mut self, region: R, ratio: f64, viewport: &V) -> bool
    where
        V: Viewport<R>,
    {
        if ratio < self.threshold || !self.watching.remove(&region) {
            return false;
        }
        viewport.unobserve(&region);
        self.visible.insert(region);
        true
    }

    #[cfg(test)]
    pub fn is_visible(&self, region: &R) -> bool {
        self.visible.contains(region)
    }

    #[cfg(test)]
    pub fn is_watching(&self, region: &R) -> bool {
        self.watching.contains(region)
    }

    pub fn visible(&self) -> HashSet<R> {
        self.visible.clone()
    }
}

impl<R> Default for RevealTracker<R>
where
    R: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new(config::REVEAL_THRESHOLD)
    }
}
