use std::sync::atomic::{AtomicUsize, Ordering};

use error_fence::{AnonymizedError, BoxError, DynError, ReturnFilter, Sentinel, SentinelSet};

#[test]
fn default_keeps_declared_error() {
    let declared = Sentinel::new("declared");

    let err = ReturnFilter::new().check(declared.clone().into(), &[&declared]);

    assert!(err.downcast_ref::<Sentinel>().unwrap().same(&declared));
}

#[test]
fn default_anonymizes_miss() {
    let declared = Sentinel::new("declared");
    let stray = Sentinel::new("stray");

    let err = ReturnFilter::new().check(stray.clone().into(), &[&declared]);

    assert_eq!(err.to_string(), "stray");
    assert!(err.downcast_ref::<AnonymizedError>().is_some());
    assert!(err.downcast_ref::<Sentinel>().is_none());
}

#[test]
fn no_matchers_means_every_error_misses() {
    let err = ReturnFilter::new().check("anything".into(), &[]);

    assert!(err.downcast_ref::<AnonymizedError>().is_some());
}

#[test]
fn first_match_short_circuits() {
    let calls = AtomicUsize::new(0);
    let counting = |_: &DynError| {
        calls.fetch_add(1, Ordering::Relaxed);
        true
    };
    let must_not_run = |_: &DynError| -> bool { panic!("later matchers must not run") };

    let err = ReturnFilter::new().check("boom".into(), &[&counting, &must_not_run]);

    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(err.to_string(), "boom");
    assert!(err.downcast_ref::<AnonymizedError>().is_none());
}

#[test]
fn matchers_are_consulted_in_order() {
    let first = AtomicUsize::new(0);
    let second = AtomicUsize::new(0);
    let miss_then_count = |_: &DynError| {
        first.fetch_add(1, Ordering::Relaxed);
        false
    };
    let hit_and_count = |_: &DynError| {
        second.fetch_add(1, Ordering::Relaxed);
        true
    };

    let _ = ReturnFilter::new().check("boom".into(), &[&miss_then_count, &hit_and_count]);

    assert_eq!(first.load(Ordering::Relaxed), 1);
    assert_eq!(second.load(Ordering::Relaxed), 1);
}

#[test]
fn passthrough_changes_nothing_on_miss() {
    let stray = Sentinel::new("stray");

    let err = ReturnFilter::passthrough().check(stray.clone().into(), &[]);

    assert!(err.downcast_ref::<Sentinel>().unwrap().same(&stray));
}

#[test]
fn missing_miss_transform_passes_error_through() {
    let my_error = Sentinel::new("foobar");
    let original = Sentinel::new("foo");
    let filter = ReturnFilter::passthrough().with_match({
        let mine = my_error.clone();
        move |_| mine.clone().into()
    });

    // `original` misses, and without a miss transform it must come back as-is.
    let err = filter.check(original.clone().into(), &[&my_error]);

    assert!(err.downcast_ref::<Sentinel>().unwrap().same(&original));
}

#[test]
fn missing_match_transform_passes_error_through() {
    let my_error = Sentinel::new("foobar");
    let replacement = Sentinel::new("replacement");
    let filter = ReturnFilter::passthrough().with_miss({
        let swap = replacement.clone();
        move |_| swap.clone().into()
    });

    // `my_error` matches, and without a match transform it must come back as-is.
    let err = filter.check(my_error.clone().into(), &[&my_error]);

    assert!(err.downcast_ref::<Sentinel>().unwrap().same(&my_error));
}

#[test]
fn miss_transform_rewrites_undeclared_error() {
    let my_error = Sentinel::new("foobar");
    let filter = ReturnFilter::passthrough().with_miss({
        let mine = my_error.clone();
        move |_| mine.clone().into()
    });

    let err = filter.check("foo".into(), &[&my_error]);

    assert!(err.downcast_ref::<Sentinel>().unwrap().same(&my_error));
}

#[test]
fn match_transform_rewrites_declared_error() {
    let trigger = Sentinel::new("foo");
    let my_error = Sentinel::new("foobar");
    let filter = ReturnFilter::passthrough().with_match({
        let mine = my_error.clone();
        move |_| mine.clone().into()
    });

    let err = filter.check(trigger.clone().into(), &[&trigger]);

    assert!(err.downcast_ref::<Sentinel>().unwrap().same(&my_error));
}

#[test]
fn miss_transform_sees_original_error() {
    let filter = ReturnFilter::passthrough()
        .with_miss(|err: BoxError| format!("filtered: {err}").into());

    let err = filter.check("out of disk".into(), &[]);

    assert_eq!(err.to_string(), "filtered: out of disk");
}

#[test]
fn refiltering_an_anonymized_error_stays_anonymized() {
    let filter = ReturnFilter::new();

    let once = filter.check("raw failure".into(), &[]);
    let twice = filter.check(once, &[]);

    assert!(twice.downcast_ref::<AnonymizedError>().is_some());
    assert_eq!(twice.to_string(), "raw failure");
}

#[test]
fn apply_on_empty_slot_is_noop() {
    let mut slot: Option<BoxError> = None;

    ReturnFilter::new().apply(&mut slot, &[]);

    assert!(slot.is_none());
}

#[test]
fn apply_filters_held_error() {
    let mut slot: Option<BoxError> = Some("boom".into());

    ReturnFilter::new().apply(&mut slot, &[]);

    assert!(slot.unwrap().downcast_ref::<AnonymizedError>().is_some());
}

#[test]
fn default_impl_matches_new() {
    let err = ReturnFilter::default().check("boom".into(), &[]);

    assert!(err.downcast_ref::<AnonymizedError>().is_some());
}

#[test]
fn clone_shares_configuration() {
    let replacement = Sentinel::new("replacement");
    let filter = ReturnFilter::passthrough().with_miss({
        let swap = replacement.clone();
        move |_| swap.clone().into()
    });

    let err = filter.clone().check("boom".into(), &[]);

    assert!(err.downcast_ref::<Sentinel>().unwrap().same(&replacement));
}

#[test]
fn debug_reports_configured_transforms() {
    let bare = format!("{:?}", ReturnFilter::passthrough());
    assert!(bare.contains("on_miss: false"));
    assert!(bare.contains("on_match: false"));

    let configured = format!("{:?}", ReturnFilter::new());
    assert!(configured.contains("on_miss: true"));
    assert!(configured.contains("on_match: false"));
}

#[test]
fn filter_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ReturnFilter>();
    assert_send_sync::<Sentinel>();
    assert_send_sync::<SentinelSet>();
    assert_send_sync::<AnonymizedError>();
}

#[test]
fn scope_passes_ok_through() {
    let value = ReturnFilter::new().scope(&[], || Ok::<_, BoxError>(7)).unwrap();

    assert_eq!(value, 7);
}

#[test]
fn scope_keeps_declared_error() {
    let declared = Sentinel::new("declared");

    let result: Result<(), BoxError> =
        ReturnFilter::new().scope(&[&declared], || Err(declared.clone().into()));

    assert!(result.unwrap_err().downcast_ref::<Sentinel>().unwrap().same(&declared));
}

#[test]
fn scope_filters_question_mark_exits() {
    fn inner() -> Result<u32, BoxError> {
        Err("deep failure".into())
    }

    let declared = Sentinel::new("declared");
    let result = ReturnFilter::new().scope(&[&declared], || {
        let n = inner()?;
        Ok(n + 1)
    });

    let err = result.unwrap_err();
    assert!(err.downcast_ref::<AnonymizedError>().is_some());
    assert_eq!(err.to_string(), "deep failure");
}

#[test]
fn shared_filter_serves_multiple_threads() {
    let declared = Sentinel::new("declared");
    let filter = ReturnFilter::new();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let err = filter.check(declared.clone().into(), &[&declared]);
                assert!(err.downcast_ref::<Sentinel>().unwrap().same(&declared));
            });
        }
    });
}
