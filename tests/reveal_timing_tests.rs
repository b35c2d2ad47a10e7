use page_enhancer::domain::model::{shared, SharedPage};
use page_enhancer::domain::ports::{ConfigProvider, Enhancer, Notifier};
use page_enhancer::{Element, Page, PageEnhancer, TokioClock};
use std::time::Duration;

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn alert(&self, _message: &str) {}
}

struct TimingConfig {
    interval_ms: u64,
}

impl ConfigProvider for TimingConfig {
    fn card_class(&self) -> &str {
        "lesson-card"
    }

    fn price_field_id(&self) -> &str {
        "price"
    }

    fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn fade_duration(&self) -> Duration {
        Duration::from_millis(500)
    }
}

fn card_page(cards: usize) -> Page {
    let mut elements = Vec::new();
    for i in 0..cards {
        elements.push(
            Element::new("div")
                .with_class("lesson-card")
                .with_id(format!("card-{}", i)),
        );
    }
    Page::new(elements)
}

/// Lets already-due tasks run without moving the clock.
async fn flush() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn opacities(page: &SharedPage) -> Vec<Option<String>> {
    let page = page.lock().await;
    page.with_class("lesson-card")
        .into_iter()
        .map(|i| page.elements[i].style("opacity").map(str::to_string))
        .collect()
}

fn revealed_count(states: &[Option<String>]) -> usize {
    states
        .iter()
        .filter(|s| s.as_deref() == Some("1"))
        .count()
}

#[tokio::test(start_paused = true)]
async fn test_cards_are_hidden_before_any_timer_fires() {
    let page = shared(card_page(4));
    let enhancer = PageEnhancer::new(TokioClock, SilentNotifier, TimingConfig { interval_ms: 100 });

    enhancer.on_ready(&page).await.unwrap();

    // Synchronous hide: every card is transparent before the first reveal
    // task has had a chance to run, even the one scheduled at 0 ms.
    let states = opacities(&page).await;
    assert_eq!(states.len(), 4);
    assert!(states.iter().all(|s| s.as_deref() == Some("0")));

    assert_eq!(enhancer.settle().await.unwrap(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_reveals_fire_at_staggered_instants_in_document_order() {
    let page = shared(card_page(4));
    let enhancer = PageEnhancer::new(TokioClock, SilentNotifier, TimingConfig { interval_ms: 100 });

    enhancer.on_ready(&page).await.unwrap();

    // t = 0: only the first card.
    flush().await;
    let states = opacities(&page).await;
    assert_eq!(states[0].as_deref(), Some("1"));
    assert!(states[1..].iter().all(|s| s.as_deref() == Some("0")));

    // Delays are a lower bound: one tick short of the next deadline,
    // nothing new fires.
    tokio::time::advance(Duration::from_millis(99)).await;
    flush().await;
    assert_eq!(revealed_count(&opacities(&page).await), 1);

    // Each further 100 ms reveals exactly the next card in document order.
    for expected in 2..=4 {
        tokio::time::advance(Duration::from_millis(if expected == 2 { 1 } else { 100 })).await;
        flush().await;
        let states = opacities(&page).await;
        assert_eq!(revealed_count(&states), expected);
        assert!(states[..expected].iter().all(|s| s.as_deref() == Some("1")));
        assert!(states[expected..].iter().all(|s| s.as_deref() == Some("0")));
    }

    assert_eq!(enhancer.settle().await.unwrap(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_reveals_everything_at_once() {
    let page = shared(card_page(3));
    let enhancer = PageEnhancer::new(TokioClock, SilentNotifier, TimingConfig { interval_ms: 0 });

    enhancer.on_ready(&page).await.unwrap();
    flush().await;

    let states = opacities(&page).await;
    assert_eq!(revealed_count(&states), 3);
    assert_eq!(enhancer.settle().await.unwrap(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_zero_cards_schedule_no_timers() {
    let page = shared(card_page(0));
    let enhancer = PageEnhancer::new(TokioClock, SilentNotifier, TimingConfig { interval_ms: 100 });

    let report = enhancer.on_ready(&page).await.unwrap();
    assert_eq!(report.cards_scheduled, 0);
    assert_eq!(enhancer.settle().await.unwrap(), 0);
}
