//! Element tree model, reader and writer

pub mod model;
pub mod reader;
pub mod writer;

pub use model::{Attribute, Element};
pub use reader::{Config, Parser};
pub use writer::Writer;
