use crate::*;

use scrollpager::{
    FetchError, LoadOutcome, Page, PageRequest, PageSource, PagerOptions, PagerPhase,
    ScrollMetrics, SliceSource,
};

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const ROW: u64 = 20;
const VIEWPORT: u32 = 100;

fn ids(n: u64) -> Vec<u64> {
    (1..=n).collect()
}

fn metrics(offset: u64, len: usize) -> ScrollMetrics {
    ScrollMetrics::new(offset, VIEWPORT, len as u64 * ROW)
}

fn bottom(len: usize) -> ScrollMetrics {
    let content = len as u64 * ROW;
    ScrollMetrics::new(content.saturating_sub(VIEWPORT as u64), VIEWPORT, content)
}

fn counting(
    data: Vec<u64>,
    calls: Arc<AtomicUsize>,
) -> impl FnMut(PageRequest) -> Result<Page<u64>, FetchError> {
    let mut inner = SliceSource::new(data);
    move |req| {
        calls.fetch_add(1, Ordering::Relaxed);
        inner.fetch(req)
    }
}

/// Scrolls to the bottom at `now_ms`, lets the debounce window and the fetch delay elapse, and
/// returns the outcome plus the new clock.
fn scroll_and_settle<S: PageSource<u64>>(
    c: &mut Controller<u64, S>,
    now_ms: u64,
) -> (Option<LoadOutcome>, u64) {
    let opts = *c.pager().options();
    c.on_scroll(bottom(c.visible().len()), now_ms);
    let now_ms = now_ms + opts.scroll_debounce_ms;
    assert_eq!(c.tick(now_ms), None);
    let now_ms = now_ms + opts.fetch_delay_ms;
    (c.tick(now_ms), now_ms)
}

#[test]
fn initialize_requests_first_page_after_delay() {
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::default(),
        SliceSource::new(ids(100)),
        0,
    );

    assert!(c.is_loading());
    assert!(c.has_pending_fetch());
    assert!(c.visible().is_empty());
    assert_eq!(c.next_deadline(), Some(1000));

    assert_eq!(c.tick(500), None);
    assert_eq!(c.tick(999), None);
    assert_eq!(
        c.tick(1000),
        Some(LoadOutcome::Appended {
            page: 1,
            count: 10,
            has_more: true
        })
    );
    assert_eq!(c.visible(), &ids(10)[..]);
    assert!(!c.is_loading());
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn new_controller_stays_idle_until_asked() {
    let mut c: Controller<u64, _> = Controller::new(
        PagerOptions::default(),
        SliceSource::new(ids(5)),
    );
    assert!(!c.is_loading());
    assert_eq!(c.tick(10_000), None);

    assert!(c.load_next_page(10_000));
    assert_eq!(c.tick(11_000).map(|o| o.appended()), Some(5));
}

#[test]
fn scroll_driven_pages_of_twenty_five() {
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::new(10),
        SliceSource::new(ids(25)),
        0,
    );
    assert_eq!(c.tick(1000).map(|o| o.appended()), Some(10));
    assert!(c.has_more());

    let (out, now) = scroll_and_settle(&mut c, 1500);
    assert_eq!(out.map(|o| o.appended()), Some(10));
    assert_eq!(c.visible(), &ids(20)[..]);

    let (out, now) = scroll_and_settle(&mut c, now + 100);
    assert_eq!(out.map(|o| o.appended()), Some(5));
    assert_eq!(c.visible(), &ids(25)[..]);
    assert!(c.has_more());

    let (out, now) = scroll_and_settle(&mut c, now + 100);
    assert_eq!(out, Some(LoadOutcome::Exhausted));
    assert_eq!(c.visible().len(), 25);
    assert!(!c.has_more());
    assert_eq!(c.pager().phase(), PagerPhase::Exhausted);

    // Nothing more is ever requested.
    c.on_scroll(bottom(25), now + 100);
    assert_eq!(c.tick(now + 10_000), None);
    assert!(!c.has_pending_fetch());
}

#[test]
fn empty_dataset_exhausts_on_first_resolution() {
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::default(),
        SliceSource::<u64>::new(Vec::new()),
        0,
    );
    assert_eq!(c.tick(1000), Some(LoadOutcome::Exhausted));
    assert!(c.visible().is_empty());
    assert!(!c.has_more());
    assert!(!c.load_next_page(2000));
}

#[test]
fn scroll_far_from_bottom_does_not_load() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::new(50),
        counting(ids(100), Arc::clone(&calls)),
        0,
    );
    c.tick(1000);
    assert_eq!(c.visible().len(), 50);

    // content = 1000, viewport = 100: offset 0 is 900 away from the bottom.
    c.on_scroll(metrics(0, 50), 1100);
    c.tick(1300);
    assert!(!c.is_loading());

    // 101 away: still outside the threshold.
    c.on_scroll(metrics(799, 50), 1400);
    c.tick(1600);
    assert!(!c.is_loading());

    c.on_scroll(metrics(800, 50), 1700);
    c.tick(1900);
    assert!(c.is_loading());
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn burst_of_scroll_events_triggers_one_evaluation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::default(),
        counting(ids(100), Arc::clone(&calls)),
        0,
    );
    c.tick(1000);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    let mut resolved = Vec::new();
    for t in 2000u64..2050 {
        c.on_scroll(metrics((t - 2000) * 2, 10), t);
        if let Some(out) = c.tick(t) {
            resolved.push(out);
        }
    }
    assert!(!c.is_loading());
    assert_eq!(c.next_deadline(), Some(2049 + 200));

    for t in 2050u64..4000 {
        if let Some(out) = c.tick(t) {
            resolved.push(out);
        }
    }

    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].appended(), 10);
    assert_eq!(c.visible().len(), 20);
}

#[test]
fn scroll_while_loading_does_not_double_fetch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::default(),
        counting(ids(100), Arc::clone(&calls)),
        0,
    );

    // First page still in flight: proximity checks are gated.
    assert!(!c.on_scroll_proximity(bottom(0), 100));
    assert!(!c.load_next_page(200));
    c.on_scroll(bottom(0), 300);
    assert_eq!(c.tick(500), None);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    assert_eq!(c.tick(1000).map(|o| o.appended()), Some(10));
    assert_eq!(c.pager().current_page(), 2);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn dispose_discards_pending_append() {
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::default(),
        SliceSource::new(ids(100)),
        0,
    );

    let notified = Arc::new(AtomicUsize::new(0));
    c.subscribe_visible({
        let notified = Arc::clone(&notified);
        move |_: &Vec<u64>| {
            notified.fetch_add(1, Ordering::Relaxed);
        }
    });
    c.subscribe_loading({
        let notified = Arc::clone(&notified);
        move |_| {
            notified.fetch_add(1, Ordering::Relaxed);
        }
    });
    assert_eq!(notified.load(Ordering::Relaxed), 2);

    c.on_scroll(bottom(0), 400);
    c.dispose();
    assert!(c.is_disposed());
    assert!(!c.has_pending_fetch());
    assert_eq!(c.next_deadline(), None);

    assert_eq!(c.tick(5000), None);
    assert!(c.visible().is_empty());
    assert!(!c.load_next_page(6000));
    assert!(!c.on_scroll_proximity(bottom(0), 6000));
    c.on_scroll(bottom(0), 6000);
    assert_eq!(c.tick(9000), None);

    assert_eq!(notified.load(Ordering::Relaxed), 2);
    assert_eq!(c.pager().subscription_count(), 0);

    // Idempotent.
    c.dispose();
}

#[test]
fn cancel_pending_releases_the_guard() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::default(),
        counting(ids(30), Arc::clone(&calls)),
        0,
    );

    assert!(c.cancel_pending());
    assert!(!c.cancel_pending());
    assert!(!c.is_loading());
    assert_eq!(c.tick(1000), None);
    assert!(c.visible().is_empty());

    // The same page is requested again.
    assert!(c.load_next_page(1000));
    assert_eq!(c.tick(2000).map(|o| o.appended()), Some(10));
    assert_eq!(c.visible(), &ids(10)[..]);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn transient_failure_is_surfaced_and_retried() {
    let mut fail_once = true;
    let mut inner = SliceSource::new(ids(30));
    let src = move |req: PageRequest| -> Result<Page<u64>, FetchError> {
        if req.page == 2 && fail_once {
            fail_once = false;
            return Err(FetchError::transient("connection reset"));
        }
        inner.fetch(req)
    };

    let mut c: Controller<u64, _> = Controller::initialize(PagerOptions::default(), src, 0);
    c.tick(1000);
    assert!(!c.retry(1000));

    let (out, now) = scroll_and_settle(&mut c, 1500);
    assert_eq!(
        out,
        Some(LoadOutcome::Failed(FetchError::Transient("connection reset".into())))
    );
    assert!(c.has_more());
    assert!(!c.is_loading());
    assert_eq!(c.visible().len(), 10);
    assert!(c.pager().last_error().is_some());

    assert!(c.retry(now));
    assert!(!c.retry(now));
    assert_eq!(c.tick(now + 1000).map(|o| o.appended()), Some(10));
    assert!(c.pager().last_error().is_none());
    assert_eq!(c.visible(), &ids(20)[..]);
}

#[test]
fn zero_delay_resolves_on_next_tick() {
    let opts = PagerOptions::default()
        .with_fetch_delay_ms(0)
        .with_scroll_debounce_ms(0);
    let mut c: Controller<u64, _> = Controller::initialize(opts, SliceSource::new(ids(15)), 7);
    assert!(c.is_loading());
    assert_eq!(c.tick(7).map(|o| o.appended()), Some(10));

    // Debounced sample and the fetch it triggers resolve in the same tick.
    c.on_scroll(bottom(10), 8);
    assert_eq!(c.tick(8).map(|o| o.appended()), Some(5));
    assert_eq!(c.visible(), &ids(15)[..]);
}

#[test]
fn next_deadline_tracks_the_earliest_timer() {
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::default(),
        SliceSource::new(ids(30)),
        0,
    );
    assert_eq!(c.next_deadline(), Some(1000));

    c.on_scroll(bottom(0), 100);
    assert_eq!(c.next_deadline(), Some(300));

    c.on_scroll(bottom(0), 900);
    assert_eq!(c.next_deadline(), Some(1000));
    c.tick(1000);
    assert_eq!(c.next_deadline(), Some(1100));
}

#[test]
fn observers_follow_the_feed() {
    let mut c: Controller<u64, _> = Controller::initialize(
        PagerOptions::new(4),
        SliceSource::new(ids(6)),
        0,
    );

    let lens = Arc::new(Mutex::new(Vec::<usize>::new()));
    let more = Arc::new(Mutex::new(Vec::<bool>::new()));
    c.subscribe_visible({
        let lens = Arc::clone(&lens);
        move |v: &Vec<u64>| lens.lock().unwrap().push(v.len())
    });
    let id = c.subscribe_has_more({
        let more = Arc::clone(&more);
        move |v| more.lock().unwrap().push(*v)
    });

    c.tick(1000);
    let (_, now) = scroll_and_settle(&mut c, 1100);
    scroll_and_settle(&mut c, now);

    assert_eq!(*lens.lock().unwrap(), vec![0, 4, 6]);
    assert_eq!(*more.lock().unwrap(), vec![true, false]);
    assert!(c.unsubscribe(id));
}

#[test]
fn deferred_due_and_remaining() {
    let d = Deferred::new("page", 100, 250);
    assert_eq!(d.due_ms(), 350);
    assert!(!d.is_due(349));
    assert!(d.is_due(350));
    assert_eq!(d.remaining_ms(300), 50);
    assert_eq!(d.remaining_ms(400), 0);
    assert_eq!(d.into_payload(), "page");

    let d = Deferred::new((), 0, 0);
    assert!(d.is_due(0));
}

#[test]
fn returning_to_the_same_spot_retries_a_failed_fetch() {
    let mut fail_once = true;
    let mut inner = SliceSource::new(ids(30));
    let src = move |req: PageRequest| -> Result<Page<u64>, FetchError> {
        if req.page == 2 && fail_once {
            fail_once = false;
            return Err(FetchError::transient("connection reset"));
        }
        inner.fetch(req)
    };

    let mut c: Controller<u64, _> = Controller::initialize(PagerOptions::default(), src, 0);
    c.tick(1000);

    c.on_scroll(bottom(10), 1100);
    assert_eq!(c.tick(1300), None);
    assert!(matches!(c.tick(2300), Some(LoadOutcome::Failed(_))));
    assert!(!c.is_loading());

    // The user nudges up and back down to exactly where the failed request came from.
    c.on_scroll(metrics(50, 10), 3000);
    c.on_scroll(bottom(10), 3050);
    assert_eq!(c.tick(3250), None);
    assert!(c.is_loading());

    assert_eq!(c.tick(4250).map(|o| o.appended()), Some(10));
    assert_eq!(c.visible(), &ids(20)[..]);
}

#[test]
fn same_spot_without_nudging_also_retries() {
    let mut fail_once = true;
    let mut inner = SliceSource::new(ids(30));
    let src = move |req: PageRequest| -> Result<Page<u64>, FetchError> {
        if req.page == 2 && fail_once {
            fail_once = false;
            return Err(FetchError::transient("connection reset"));
        }
        inner.fetch(req)
    };

    let mut c: Controller<u64, _> = Controller::initialize(PagerOptions::default(), src, 0);
    c.tick(1000);
    let (out, now) = scroll_and_settle(&mut c, 1100);
    assert!(matches!(out, Some(LoadOutcome::Failed(_))));

    let (out, _) = scroll_and_settle(&mut c, now + 100);
    assert_eq!(out.map(|o| o.appended()), Some(10));
}

#[cfg(feature = "serde")]
#[test]
fn deferred_is_serializable() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
    assert_serde::<Deferred<u64>>();
    assert_serde::<Deferred<(PageRequest, u32)>>();
}
