use super::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Records every subscribe/unsubscribe so tests can assert exactly how the
/// controller drives its owned source.
#[derive(Default)]
struct RecordingSource {
    log: Rc<RefCell<Vec<(&'static str, RevealTargetId)>>>,
    watched: HashSet<RevealTargetId>,
}

impl RecordingSource {
    fn with_log(log: Rc<RefCell<Vec<(&'static str, RevealTargetId)>>>) -> Self {
        Self {
            log,
            watched: HashSet::new(),
        }
    }
}

impl IntersectionSource for RecordingSource {
    fn subscribe(&mut self, target: RevealTargetId) {
        self.watched.insert(target);
        self.log.borrow_mut().push(("subscribe", target));
    }

    fn unsubscribe(&mut self, target: RevealTargetId) {
        self.watched.remove(&target);
        self.log.borrow_mut().push(("unsubscribe", target));
    }
}

fn targets(n: u64) -> Vec<RevealTargetId> {
    (0..n).map(RevealTargetId).collect()
}

#[test]
fn missing_capability_reveals_everything_immediately_with_zero_observer_calls() {
    let controller = RevealController::<RecordingSource>::mount(targets(5), None);

    assert!(controller.all_visible());
    assert_eq!(controller.target_count(), 5);
    assert!(controller.source().is_none());
}

#[test]
fn mounted_targets_stay_hidden_until_an_intersection_arrives() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let controller =
        RevealController::mount(targets(4), Some(RecordingSource::with_log(log.clone())));

    assert!(!controller.all_visible());
    for target in targets(4) {
        assert!(!controller.is_visible(target));
    }
    // All four were subscribed, nothing more.
    assert_eq!(log.borrow().len(), 4);
    assert!(log.borrow().iter().all(|(call, _)| *call == "subscribe"));
}

#[test]
fn crossing_the_threshold_reveals_once_and_unsubscribes_that_target_only() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut controller =
        RevealController::mount(targets(3), Some(RecordingSource::with_log(log.clone())));

    controller.on_intersection(IntersectionEvent {
        target: RevealTargetId(1),
        ratio: 0.2,
    });

    assert!(controller.is_visible(RevealTargetId(1)));
    assert!(!controller.is_visible(RevealTargetId(0)));
    assert!(!controller.is_visible(RevealTargetId(2)));
    assert_eq!(
        *log.borrow().last().expect("one unsubscribe"),
        ("unsubscribe", RevealTargetId(1))
    );
    let source = controller.source().expect("still mounted");
    assert!(!source.watched.contains(&RevealTargetId(1)));
    assert!(source.watched.contains(&RevealTargetId(0)));
}

#[test]
fn sub_threshold_ratios_do_not_reveal() {
    let mut controller =
        RevealController::mount(targets(1), Some(RecordingSource::default()));

    controller.on_intersection(IntersectionEvent {
        target: RevealTargetId(0),
        ratio: 0.19,
    });

    assert!(!controller.is_visible(RevealTargetId(0)));
}

#[test]
fn visibility_is_monotonic_and_later_events_are_ignored() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut controller =
        RevealController::mount(targets(2), Some(RecordingSource::with_log(log.clone())));

    let event = IntersectionEvent {
        target: RevealTargetId(0),
        ratio: 0.9,
    };
    controller.on_intersection(event);
    let calls_after_first = log.borrow().len();

    // Re-scrolling past the element produces more events; none may change
    // anything.
    controller.on_intersection(event);
    controller.on_intersection(IntersectionEvent {
        target: RevealTargetId(0),
        ratio: 0.0,
    });

    assert!(controller.is_visible(RevealTargetId(0)));
    assert_eq!(log.borrow().len(), calls_after_first);
}

#[test]
fn events_for_untracked_targets_are_ignored() {
    let mut controller =
        RevealController::mount(targets(2), Some(RecordingSource::default()));

    controller.on_intersection(IntersectionEvent {
        target: RevealTargetId(99),
        ratio: 1.0,
    });

    assert!(!controller.is_visible(RevealTargetId(99)));
    assert!(!controller.all_visible());
}

#[test]
fn unmount_unsubscribes_pending_targets_and_suppresses_late_events() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut controller =
        RevealController::mount(targets(3), Some(RecordingSource::with_log(log.clone())));

    controller.on_intersection(IntersectionEvent {
        target: RevealTargetId(2),
        ratio: 0.5,
    });
    controller.unmount();

    // The two still-hidden targets were unsubscribed on teardown; the
    // revealed one already was.
    let unsubscribed: HashSet<RevealTargetId> = log
        .borrow()
        .iter()
        .filter(|(call, _)| *call == "unsubscribe")
        .map(|(_, target)| *target)
        .collect();
    assert_eq!(
        unsubscribed,
        targets(3).into_iter().collect::<HashSet<_>>()
    );
    assert!(controller.source().is_none());

    controller.on_intersection(IntersectionEvent {
        target: RevealTargetId(0),
        ratio: 1.0,
    });
    assert!(!controller.is_visible(RevealTargetId(0)));
}
