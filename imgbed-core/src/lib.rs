pub mod gateways;
pub mod list;
pub mod metadata;
pub mod repositories;
pub mod tag;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use imgbed_entities::{file::*, search::*, tag::*, time::*, upload::*};
}
