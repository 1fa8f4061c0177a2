pub mod account;
pub mod application;
pub mod error;
pub mod score;

pub use account::*;
pub use application::*;
pub use error::*;
pub use score::*;
