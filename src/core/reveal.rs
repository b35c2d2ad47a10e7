use crate::domain::model::{Page, SharedPage};
use crate::domain::ports::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Stagger delay for the i-th card (0-indexed, document order).
pub fn reveal_delay(index: usize, interval: Duration) -> Duration {
    interval * index as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    pub element: usize,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealPlan {
    pub steps: Vec<RevealStep>,
}

/// Fades cards in one after another. Cards are hidden synchronously at
/// prepare time; each reveal then runs on its own timer, so consecutive
/// fades overlap and nothing waits for the previous card to finish.
pub struct RevealSequencer<C: Clock + Clone + 'static> {
    clock: C,
    interval: Duration,
    fade: Duration,
}

impl<C: Clock + Clone + 'static> RevealSequencer<C> {
    pub fn new(clock: C, interval: Duration, fade: Duration) -> Self {
        Self {
            clock,
            interval,
            fade,
        }
    }

    /// Hides every element carrying `card_class` and returns one step per
    /// card, delays growing with document order. The transition style is
    /// left untouched here so the hide itself is never animated.
    pub fn prepare(&self, page: &mut Page, card_class: &str) -> RevealPlan {
        let mut steps = Vec::new();
        for (i, idx) in page.with_class(card_class).into_iter().enumerate() {
            page.elements[idx].set_style("opacity", "0");
            steps.push(RevealStep {
                element: idx,
                delay: reveal_delay(i, self.interval),
            });
        }
        tracing::debug!("Prepared staggered reveal for {} cards", steps.len());
        RevealPlan { steps }
    }

    /// One independent task per step. Each sleeps its own delay, then
    /// enables the eased transition and sets opacity to 1. Dropping the
    /// returned set discards pending reveals, which is normal teardown.
    pub fn spawn(&self, page: &SharedPage, plan: RevealPlan) -> JoinSet<usize> {
        let mut reveals = JoinSet::new();
        let transition = self.transition();

        for step in plan.steps {
            let clock = self.clock.clone();
            let page = Arc::clone(page);
            let transition = transition.clone();
            reveals.spawn(async move {
                clock.sleep(step.delay).await;
                let mut page = page.lock().await;
                if let Some(el) = page.elements.get_mut(step.element) {
                    el.set_style("transition", &transition);
                    el.set_style("opacity", "1");
                    tracing::debug!("Revealed card at index {}", step.element);
                } else {
                    tracing::warn!("Card at index {} is gone, skipping reveal", step.element);
                }
                step.element
            });
        }

        reveals
    }

    fn transition(&self) -> String {
        format!("opacity {}s ease", self.fade.as_secs_f32())
    }
}
