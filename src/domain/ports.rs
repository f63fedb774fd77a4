use crate::domain::model::{BreedView, Catalog, PageInfo, Tab};
use crate::utils::error::Result;

/// Anything that can hand the session a catalog to display.
pub trait CatalogSource {
    fn catalog(&self) -> Result<Catalog>;
}

/// Rendering side of the page. The session never calls this; the runner does.
pub trait Presenter {
    fn show_banner(&mut self, page: &PageInfo) -> Result<()>;
    fn show_tab(&mut self, tab: Tab) -> Result<()>;
    fn show_fact(&mut self, index: usize, total: usize, fact: &str) -> Result<()>;
    fn show_breeds(&mut self, breeds: &[BreedView]) -> Result<()>;
    fn show_like(&mut self, breed: &BreedView) -> Result<()>;
    fn show_notice(&mut self, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::builtin())
    }
}
