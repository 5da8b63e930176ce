pub mod format;
pub mod markup;
pub mod preview;
pub mod types;
pub mod validate;

pub use format::*;
pub use markup::*;
pub use preview::*;
pub use types::*;
pub use validate::*;
