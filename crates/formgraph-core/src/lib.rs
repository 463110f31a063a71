pub mod convert;
pub use convert::{convert_form_field, Converter};

mod error;
pub use error::{Error, IntoError};

pub mod form;
pub use form::Form;

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses formgraph's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
