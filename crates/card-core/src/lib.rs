pub mod constants;
pub mod gate;
pub mod snow;
pub mod tree;

pub use constants::*;
pub use gate::*;
pub use snow::*;
pub use tree::*;
