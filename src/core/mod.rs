pub mod clock;
pub mod engine;
pub mod enhancer;
pub mod guard;
pub mod reveal;

pub use crate::domain::model::{Element, Page, ReadyReport, SharedPage, SubmitOutcome};
pub use crate::domain::ports::{Clock, ConfigProvider, Enhancer, Notifier, PageStore};
pub use crate::utils::error::Result;
