pub mod builder;
pub mod person;
pub mod role;
pub mod statistics;

pub use builder::*;
pub use person::*;
pub use role::*;
pub use statistics::*;
