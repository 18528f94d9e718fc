mod cipher;
mod core;
mod error;
mod key;
mod mode;
mod modes;
mod session;

pub use self::core::BLOCK_SIZE;
pub use error::{Error, Result};
pub use key::Key;
pub use mode::Mode;
pub use session::Session;
