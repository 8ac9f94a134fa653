//! One-shot scroll-reveal tracking.
//!
//! The controller takes a static snapshot of reveal targets at mount time
//! and owns the intersection subscription for each of them until the target
//! becomes visible or the controller is unmounted. Visibility is monotonic:
//! once a target has been revealed it is never re-observed or re-hidden.

use std::collections::HashMap;

/// Minimum share of a target's area that must enter the viewport before it
/// is revealed.
pub const REVEAL_VISIBILITY_THRESHOLD: f32 = 0.2;

/// Opaque handle to one renderable element tagged for observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealTargetId(pub u64);

/// One viewport-intersection measurement for a subscribed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub target: RevealTargetId,
    pub ratio: f32,
}

/// Subscription seam to whatever primitive can report viewport
/// intersections. The controller subscribes every hidden target on mount and
/// unsubscribes each one after its first positive event, so an
/// implementation only ever measures targets that still matter.
pub trait IntersectionSource {
    fn subscribe(&mut self, target: RevealTargetId);
    fn unsubscribe(&mut self, target: RevealTargetId);
}

/// Reveals targets as they scroll into view.
///
/// Constructed with `None` for the source when the environment cannot
/// observe intersections at all; every target is then visible immediately.
/// That degraded mode is supported behavior, not an error, and this
/// component has no error path anywhere.
pub struct RevealController<S: IntersectionSource> {
    visible: HashMap<RevealTargetId, bool>,
    source: Option<S>,
    threshold: f32,
    torn_down: bool,
}

impl<S: IntersectionSource> RevealController<S> {
    /// Snapshots `targets` and wires observation. Targets created after this
    /// call are not tracked.
    pub fn mount(targets: impl IntoIterator<Item = RevealTargetId>, source: Option<S>) -> Self {
        let mut controller = Self {
            visible: HashMap::new(),
            source,
            threshold: REVEAL_VISIBILITY_THRESHOLD,
            torn_down: false,
        };
        for target in targets {
            match controller.source.as_mut() {
                Some(source) => {
                    controller.visible.insert(target, false);
                    source.subscribe(target);
                }
                // Degraded mode: content must never be stuck hidden.
                None => {
                    controller.visible.insert(target, true);
                }
            }
        }
        controller
    }

    /// Applies one intersection measurement. Reveals the target and drops
    /// its subscription when the ratio meets the threshold; ignores events
    /// for unknown or already-visible targets and everything after
    /// [`unmount`](Self::unmount).
    pub fn on_intersection(&mut self, event: IntersectionEvent) {
        if self.torn_down {
            return;
        }
        let Some(visible) = self.visible.get_mut(&event.target) else {
            return;
        };
        if *visible || event.ratio < self.threshold {
            return;
        }
        *visible = true;
        if let Some(source) = self.source.as_mut() {
            source.unsubscribe(event.target);
        }
        tracing::debug!(target_id = event.target.0, ratio = event.ratio, "revealed target");
    }

    pub fn is_visible(&self, target: RevealTargetId) -> bool {
        self.visible.get(&target).copied().unwrap_or(false)
    }

    pub fn all_visible(&self) -> bool {
        self.visible.values().all(|visible| *visible)
    }

    pub fn target_count(&self) -> usize {
        self.visible.len()
    }

    /// The owned subscription source, when observation is supported and the
    /// controller is still mounted.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Cancels every remaining subscription and suppresses all further
    /// transitions. Hidden targets stay hidden; nothing calls back into a
    /// torn-down view.
    pub fn unmount(&mut self) {
        if let Some(mut source) = self.source.take() {
            for (target, visible) in &self.visible {
                if !visible {
                    source.unsubscribe(*target);
                }
            }
        }
        self.torn_down = true;
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
