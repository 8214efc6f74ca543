// Example: a frame loop driving the controller with a user who keeps scrolling down.
use scrollpager::{PagerOptions, ScrollMetrics, SliceSource};
use scrollpager_adapter::Controller;

fn main() {
    let row = 40u64;
    let viewport = 240u32;
    let source = SliceSource::new((1..=42u32).collect::<Vec<_>>());
    let mut c: Controller<u32, _> = Controller::initialize(PagerOptions::new(10), source, 0);

    c.subscribe_loading(|loading| {
        if *loading {
            println!("  (spinner on)");
        }
    });

    let mut now_ms = 0u64;
    let mut offset = 0u64;
    while c.has_more() && now_ms < 60_000 {
        // Simulate a 60fps tick.
        now_ms += 16;

        // The user flicks down 12 units per frame while there is content to scroll.
        let content = c.visible().len() as u64 * row;
        let max_offset = content.saturating_sub(viewport as u64);
        if offset < max_offset {
            offset = (offset + 12).min(max_offset);
            c.on_scroll(ScrollMetrics::new(offset, viewport, content), now_ms);
        }

        if let Some(outcome) = c.tick(now_ms) {
            println!(
                "t={now_ms}ms offset={offset} visible={} outcome={outcome:?}",
                c.visible().len()
            );
        }
    }

    c.dispose();
    println!(
        "done: visible={} has_more={} disposed={}",
        c.visible().len(),
        c.has_more(),
        c.is_disposed()
    );
}
