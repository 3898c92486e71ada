//! One-shot entrance reveals driven by viewport intersection.

/// Intersection-observer options for the reveal targets.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealOptions {
    pub fn from_config(cfg: &crate::config::PageConfig) -> Self {
        Self {
            threshold: cfg.reveal_threshold,
            root_margin: cfg.reveal_root_margin.clone(),
        }
    }
}

/// Tracks which observed elements have been revealed. Reveals are permanent.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.get(target).copied().unwrap_or(false)
    }

    /// Process one notification batch of `(target, is_intersecting)` pairs in order.
    ///
    /// Returns the targets revealed by this batch.
    pub fn observe(&mut self, batch: &[(usize, bool)]) -> Vec<usize> {
        let mut out = Vec::new();
        for &(target, intersecting) in batch {
            if !intersecting {
                continue;
            }
            if let Some(slot) = self.revealed.get_mut(target) {
                if !*slot {
                    *slot = true;
                    out.push(target);
                }
            }
        }
        out
    }

    /// Reveal everything at once, for hosts without intersection observation.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let mut out = Vec::new();
        for (i, slot) in self.revealed.iter_mut().enumerate() {
            if !*slot {
                *slot = true;
                out.push(i);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_are_one_shot() {
        let mut r = RevealTracker::new(3);
        assert_eq!(r.observe(&[(0, true), (1, false)]), vec![0]);
        assert_eq!(r.observe(&[(0, false), (0, true), (1, true)]), vec![1]);
        assert!(r.is_revealed(0));
        assert!(r.is_revealed(1));
        assert!(!r.is_revealed(2));
    }

    #[test]
    fn duplicate_entries_in_a_batch_reveal_once() {
        let mut r = RevealTracker::new(2);
        assert_eq!(r.observe(&[(1, true), (1, true)]), vec![1]);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut r = RevealTracker::new(1);
        assert!(r.observe(&[(5, true)]).is_empty());
    }

    #[test]
    fn fallback_reveals_everything_remaining() {
        let mut r = RevealTracker::new(4);
        r.observe(&[(2, true)]);
        assert_eq!(r.reveal_all(), vec![0, 1, 3]);
        assert!(r.reveal_all().is_empty());
    }
}
