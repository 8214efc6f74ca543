use scrollpager::{Pager, PagerOptions, ScrollMetrics, SliceSource};

fn main() {
    let mut source = SliceSource::new((1..=35u32).collect::<Vec<_>>());
    let mut pager: Pager<u32> = Pager::new(PagerOptions::new(10));

    pager.subscribe_visible(|items: &Vec<u32>| println!("visible: {} items", items.len()));

    // Initial page.
    pager.load_next_page_with(&mut source);

    // Each page is 10 rows of 20 units in a 100-unit viewport; scroll to the bottom each time.
    let row = 20u64;
    while pager.has_more() {
        let content = pager.len() as u64 * row;
        let metrics = ScrollMetrics::new(content.saturating_sub(100), 100, content);
        if pager.should_load_for(metrics) {
            let outcome = pager.load_next_page_with(&mut source);
            println!("page {} -> {:?}", pager.current_page(), outcome);
        }
    }

    println!("done: {} items, phase={:?}", pager.len(), pager.phase());
}
