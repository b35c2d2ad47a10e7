use crate::utils::error::{EnhanceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One node of a page snapshot. Inline styles are plain string pairs, the
/// way the browser exposes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub styles: HashMap<String, String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            styles: HashMap::new(),
            value: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn set_style(&mut self, name: &str, value: &str) {
        self.styles.insert(name.to_string(), value.to_string());
    }
}

/// A page snapshot. Element order is document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Indices of all elements carrying `class`, in document order.
    pub fn with_class(&self, class: &str) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.has_class(class))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|el| el.id.as_deref() == Some(id))
    }

    /// Index of the first element with the given tag, if any.
    pub fn first_tag(&self, tag: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.tag == tag)
    }

    pub fn set_value(&mut self, id: &str, value: &str) -> Result<()> {
        let el = self
            .by_id_mut(id)
            .ok_or_else(|| EnhanceError::MissingElementError { id: id.to_string() })?;
        el.value = Some(value.to_string());
        Ok(())
    }
}

/// The page is the only shared mutable resource; reveal tasks and the
/// submit guard take the lock briefly and never hold it across a sleep.
pub type SharedPage = Arc<Mutex<Page>>;

pub fn shared(page: Page) -> SharedPage {
    Arc::new(Mutex::new(page))
}

/// What the initialization routine did with the page it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyReport {
    pub cards_scheduled: usize,
    pub guard_installed: bool,
}

/// Why a submission was blocked.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockReason {
    NonPositive { value: f64 },
    Empty,
    NotANumber { raw: String },
}

impl BlockReason {
    pub fn message(&self) -> &'static str {
        match self {
            BlockReason::NonPositive { .. } => "Цена должна быть положительной!",
            BlockReason::Empty => "Цена не указана!",
            BlockReason::NotANumber { .. } => "Цена должна быть числом!",
        }
    }
}

/// Result of one submit attempt. `Proceed` hands control back to the host;
/// `Blocked` keeps the user on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Proceed,
    Blocked { reason: BlockReason },
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked { .. })
    }
}
