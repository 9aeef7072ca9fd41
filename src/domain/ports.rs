use crate::domain::model::{EntryPosition, MenuCategory};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read/write seam to the server owning the interface menu.
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Fetch all categories (with their entries) for one project.
    async fn fetch_menu(&self, project_id: u64) -> Result<Vec<MenuCategory>>;

    /// Apply a new ordering server-side.
    async fn apply_order(&self, positions: &[EntryPosition]) -> Result<()>;
}

/// A destination that can receive snippet text for pasting.
pub trait ClipboardSink {
    /// Short name for logs ("system", "osc52", "stdout").
    fn name(&self) -> &'static str;

    fn write(&mut self, text: &str) -> Result<()>;
}
