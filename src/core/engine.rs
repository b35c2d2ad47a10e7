use crate::domain::model::{ReadyReport, SharedPage, SubmitOutcome};
use crate::domain::ports::Enhancer;
use crate::utils::error::Result;

/// Thin driver around an `Enhancer`: runs the ready routine, waits out the
/// reveal cascade, and forwards submit attempts, logging progress.
pub struct EnhanceEngine<E: Enhancer> {
    enhancer: E,
}

impl<E: Enhancer> EnhanceEngine<E> {
    pub fn new(enhancer: E) -> Self {
        Self { enhancer }
    }

    pub async fn run(&self, page: &SharedPage) -> Result<ReadyReport> {
        tracing::info!("Enhancing page...");
        let report = self.enhancer.on_ready(page).await?;
        tracing::info!("Scheduled {} card reveals", report.cards_scheduled);
        if report.guard_installed {
            tracing::info!("Submit guard installed on form");
        }

        let revealed = self.enhancer.settle().await?;
        tracing::info!("Revealed {} cards", revealed);
        Ok(report)
    }

    pub async fn submit(&self, page: &SharedPage) -> Result<SubmitOutcome> {
        let outcome = self.enhancer.submit(page).await?;
        match &outcome {
            SubmitOutcome::Proceed => tracing::info!("Submission proceeds"),
            SubmitOutcome::Blocked { reason } => {
                tracing::info!("Submission blocked: {}", reason.message());
            }
        }
        Ok(outcome)
    }
}
