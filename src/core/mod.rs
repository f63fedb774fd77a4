pub mod auto_advance;
pub mod likes;
pub mod rotator;
pub mod session;

pub use crate::domain::model::{BreedView, Catalog, SessionEvent, Tab};
pub use crate::domain::ports::{CatalogSource, Presenter};
pub use crate::utils::error::Result;
