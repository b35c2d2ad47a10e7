use crate::domain::model::Page;
use crate::domain::ports::{Notifier, PageStore};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem-backed page snapshots (JSON).
#[derive(Debug, Clone)]
pub struct LocalPageStore {
    base_path: String,
}

impl LocalPageStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl PageStore for LocalPageStore {
    async fn load_page(&self, path: &str) -> Result<Page> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        let page = serde_json::from_slice(&data)?;
        Ok(page)
    }

    async fn store_page(&self, path: &str, page: &Page) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(page)?;
        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Prints the alert text to stderr, where the browser would show a blocking
/// modal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}
