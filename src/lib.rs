pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{runner::run_session, terminal::TerminalPresenter};
pub use config::toml_config::TomlConfig;
pub use core::{
    likes::LikeRegistry,
    rotator::FactRotator,
    session::{Session, SessionEvents, SessionSettings},
};
pub use domain::model::{Breed, BreedView, Catalog, PageInfo, SessionSummary, Tab};
pub use domain::ports::{BuiltinCatalog, CatalogSource, Presenter};
pub use utils::error::{FelineError, Result};
