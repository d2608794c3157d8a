pub mod assignment;
pub mod draft;
pub mod error;
pub mod format;

pub use assignment::*;
pub use draft::*;
pub use error::*;
pub use format::*;
