use crate::core::guard::SubmitGuard;
use crate::core::reveal::RevealSequencer;
use crate::domain::model::{ReadyReport, SharedPage, SubmitOutcome};
use crate::domain::ports::{Clock, ConfigProvider, Enhancer, Notifier};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Wires both page behaviors to an injected page root: the staggered card
/// reveal and the submission guard. Neither depends on the other; both
/// depend only on what is present in the page at ready-time.
pub struct PageEnhancer<C: Clock + Clone + 'static, N: Notifier, F: ConfigProvider> {
    sequencer: RevealSequencer<C>,
    notifier: N,
    config: F,
    guard: Mutex<Option<SubmitGuard>>,
    reveals: Mutex<Option<JoinSet<usize>>>,
}

impl<C: Clock + Clone + 'static, N: Notifier, F: ConfigProvider> PageEnhancer<C, N, F> {
    pub fn new(clock: C, notifier: N, config: F) -> Self {
        let sequencer =
            RevealSequencer::new(clock, config.reveal_interval(), config.fade_duration());
        Self {
            sequencer,
            notifier,
            config,
            guard: Mutex::new(None),
            reveals: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<C: Clock + Clone + 'static, N: Notifier, F: ConfigProvider> Enhancer
    for PageEnhancer<C, N, F>
{
    async fn on_ready(&self, page: &SharedPage) -> Result<ReadyReport> {
        let (plan, guard) = {
            let mut page = page.lock().await;
            let plan = self.sequencer.prepare(&mut page, self.config.card_class());
            let guard = SubmitGuard::install(&page, self.config.price_field_id());
            (plan, guard)
        };

        let report = ReadyReport {
            cards_scheduled: plan.steps.len(),
            guard_installed: guard.is_some(),
        };

        *self.guard.lock().await = guard;
        *self.reveals.lock().await = Some(self.sequencer.spawn(page, plan));

        Ok(report)
    }

    async fn settle(&self) -> Result<usize> {
        let Some(mut reveals) = self.reveals.lock().await.take() else {
            return Ok(0);
        };

        let mut revealed = 0;
        while let Some(joined) = reveals.join_next().await {
            match joined {
                Ok(_) => revealed += 1,
                Err(e) => tracing::warn!("Reveal task failed: {}", e),
            }
        }
        Ok(revealed)
    }

    async fn submit(&self, page: &SharedPage) -> Result<SubmitOutcome> {
        let guard = self.guard.lock().await;
        let Some(guard) = guard.as_ref() else {
            tracing::debug!("No submit guard installed, submission proceeds");
            return Ok(SubmitOutcome::Proceed);
        };

        let outcome = {
            let page = page.lock().await;
            guard.check(&page)?
        };

        if let SubmitOutcome::Blocked { reason } = &outcome {
            tracing::warn!("Submission blocked: {}", reason.message());
            self.notifier.alert(reason.message());
        }
        Ok(outcome)
    }
}
