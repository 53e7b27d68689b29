pub mod disease;
pub mod identifier;
pub mod recommendation;
pub mod severity;
pub mod weather;

pub use disease::*;
pub use identifier::*;
pub use recommendation::*;
pub use severity::*;
pub use weather::*;
