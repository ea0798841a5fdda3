use error_fence::{AnonymizedError, BoxError, FilterGuard, ReturnFilter, Sentinel};

fn run_with_guard(fail_early: bool, slot: &mut Option<BoxError>, declared: &Sentinel) {
    let mut guard = FilterGuard::new(slot, &[declared]);
    if fail_early {
        guard.capture("early stray");
        return;
    }
    guard.capture(declared.clone());
}

#[test]
fn drop_filters_captured_error() {
    let declared = Sentinel::new("declared");
    let mut slot: Option<BoxError> = None;

    {
        let mut guard = FilterGuard::new(&mut slot, &[&declared]);
        guard.capture(Sentinel::new("stray"));
    }

    let err = slot.unwrap();
    assert_eq!(err.to_string(), "stray");
    assert!(err.downcast_ref::<AnonymizedError>().is_some());
}

#[test]
fn drop_keeps_declared_error() {
    let declared = Sentinel::new("declared");
    let mut slot: Option<BoxError> = None;

    {
        let mut guard = FilterGuard::new(&mut slot, &[&declared]);
        guard.capture(declared.clone());
    }

    assert!(slot.unwrap().downcast_ref::<Sentinel>().unwrap().same(&declared));
}

#[test]
fn empty_slot_stays_empty() {
    let declared = Sentinel::new("declared");
    let mut slot: Option<BoxError> = None;

    {
        let _guard = FilterGuard::new(&mut slot, &[&declared]);
    }

    assert!(slot.is_none());
}

#[test]
fn capture_replaces_previous_error() {
    let mut slot: Option<BoxError> = None;

    {
        let mut guard = FilterGuard::new(&mut slot, &[]);
        guard.capture("first");
        assert!(guard.has_error());
        guard.capture("second");
    }

    assert_eq!(slot.unwrap().to_string(), "second");
}

#[test]
fn has_error_tracks_slot_state() {
    let mut slot: Option<BoxError> = Some("pre-existing".into());

    let guard = FilterGuard::new(&mut slot, &[]);
    assert!(guard.has_error());
}

#[test]
fn early_return_is_still_filtered() {
    let declared = Sentinel::new("declared");
    let mut slot: Option<BoxError> = None;

    run_with_guard(true, &mut slot, &declared);
    assert!(slot.take().unwrap().downcast_ref::<AnonymizedError>().is_some());

    run_with_guard(false, &mut slot, &declared);
    assert!(slot.unwrap().downcast_ref::<Sentinel>().unwrap().same(&declared));
}

#[test]
fn guard_runs_during_unwind() {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let mut slot: Option<BoxError> = None;

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut guard = FilterGuard::new(&mut slot, &[]);
        guard.capture("failed before panic");
        panic!("boom");
    }));
    assert!(outcome.is_err());

    let err = slot.unwrap();
    assert_eq!(err.to_string(), "failed before panic");
    assert!(err.downcast_ref::<AnonymizedError>().is_some());
}

#[test]
fn with_filter_uses_custom_policy() {
    let wrapping = ReturnFilter::passthrough()
        .with_miss(|err: BoxError| format!("filtered: {err}").into());
    let mut slot: Option<BoxError> = None;

    {
        let mut guard = FilterGuard::with_filter(&wrapping, &mut slot, &[]);
        guard.capture("out of disk");
    }

    assert_eq!(slot.unwrap().to_string(), "filtered: out of disk");
}

#[test]
fn filter_guard_method_binds_slot() {
    let declared = Sentinel::new("declared");
    let filter = ReturnFilter::new();
    let mut slot: Option<BoxError> = Some(declared.clone().into());

    let guard = filter.guard(&mut slot, &[&declared]);
    drop(guard);

    assert!(slot.unwrap().downcast_ref::<Sentinel>().unwrap().same(&declared));
}

#[test]
fn debug_reports_pending_state() {
    let mut slot: Option<BoxError> = None;
    let mut guard = FilterGuard::new(&mut slot, &[]);

    assert!(format!("{guard:?}").contains("pending: false"));

    guard.capture("boom");
    assert!(format!("{guard:?}").contains("pending: true"));
}
