pub mod embedded_source;
pub mod json_source;

pub use embedded_source::EmbeddedSource;
pub use json_source::JsonSource;
