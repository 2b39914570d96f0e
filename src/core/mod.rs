pub mod capture;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod landmarks;
pub mod state;
pub mod stream;
pub mod view;

pub use capture::*;
pub use drag::*;
pub use error::*;
pub use geometry::*;
pub use landmarks::*;
pub use state::*;
pub use stream::*;
