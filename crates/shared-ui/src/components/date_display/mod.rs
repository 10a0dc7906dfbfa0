mod component;
mod config;
mod format;
mod labels;
mod policy;
pub mod relative;

pub use component::*;
pub use config::*;
pub use format::*;
pub use labels::*;
pub use policy::*;
