use crate::domain::model::{Page, ReadyReport, SharedPage, SubmitOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Timer facility. Delays are a lower bound, never exact; the production
/// impl defers to the runtime's timer wheel, tests run it under a paused
/// clock.
pub trait Clock: Send + Sync {
    fn sleep(&self, delay: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Surface for user-facing notifications. Stands in for the blocking modal
/// the presentation layer may choose to show.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Load/store page snapshots. This is how a page root gets injected from
/// outside the process.
pub trait PageStore: Send + Sync {
    fn load_page(&self, path: &str) -> impl std::future::Future<Output = Result<Page>> + Send;
    fn store_page(
        &self,
        path: &str,
        page: &Page,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn card_class(&self) -> &str;
    fn price_field_id(&self) -> &str;
    fn reveal_interval(&self) -> Duration;
    fn fade_duration(&self) -> Duration;
}

/// The two page behaviors behind one seam: a once-per-page initialization
/// routine plus the per-attempt submit hook.
#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Runs once when the page is ready. Hides and schedules card reveals,
    /// installs the submit guard if a form is present. Returns without
    /// waiting for the reveals.
    async fn on_ready(&self, page: &SharedPage) -> Result<ReadyReport>;

    /// Waits for all scheduled reveals and returns how many ran.
    async fn settle(&self) -> Result<usize>;

    /// Handles one submit attempt.
    async fn submit(&self, page: &SharedPage) -> Result<SubmitOutcome>;
}
