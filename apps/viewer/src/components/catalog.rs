//! Folder catalog: the grouped grid of folder cards.

use question_core::{group_folders, CatalogLayout, CatalogStats, Folder, FolderCategory};

use crate::api::ApiError;
use crate::page::{ElementId, Page};
use crate::views;

pub const LOAD_FAILED: &str = "Failed to load folder information";

#[derive(Debug, Default)]
pub struct FolderCatalog {
    folders: Vec<Folder>,
    categories: Vec<FolderCategory>,
    layout: CatalogLayout,
}

impl FolderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn categories(&self) -> &[FolderCategory] {
        &self.categories
    }

    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    pub fn find(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    /// Apply the result of a folder fetch and redraw the grid.
    ///
    /// A failed fetch keeps the previous folders; the returned message is meant
    /// for the error banner.
    pub fn apply_loaded(
        &mut self,
        page: &mut dyn Page,
        result: Result<Vec<Folder>, ApiError>,
    ) -> Option<&'static str> {
        let failure = match result {
            Ok(folders) => {
                tracing::info!(count = folders.len(), "loaded folders");
                self.folders = folders;
                self.update_stats(page);
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading folders");
                Some(LOAD_FAILED)
            }
        };
        self.render(page);
        failure
    }

    fn update_stats(&self, page: &mut dyn Page) {
        let stats = CatalogStats::from_folders(&self.folders);
        page.set_text(ElementId::FolderCount, &stats.folder_count.to_string());
        page.set_text(ElementId::TotalQuestions, &stats.total_questions.to_string());
    }

    /// Regroup and redraw for the current viewport. Collapse state is reset.
    pub fn render(&mut self, page: &mut dyn Page) {
        self.categories = group_folders(&self.folders);
        self.layout = CatalogLayout::for_viewport(self.categories.len(), page.viewport_width());
        self.draw(page);
    }

    /// Section header click.
    pub fn toggle(&mut self, page: &mut dyn Page, index: usize) {
        if self.layout.toggle(index) {
            self.draw(page);
        }
    }

    fn draw(&self, page: &mut dyn Page) {
        page.set_html(
            ElementId::FoldersGrid,
            views::folder_sections(&self.categories, &self.layout),
        );
    }
}
