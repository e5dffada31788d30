pub mod info;
pub mod open;
pub mod seal;

pub use info::*;
pub use open::*;
pub use seal::*;
