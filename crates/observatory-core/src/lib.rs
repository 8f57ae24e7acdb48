pub mod animation;
pub mod charts;
pub mod constants;
pub mod distance;
pub mod format;
pub mod particles;
pub mod scale;

pub use animation::*;
pub use charts::*;
pub use constants::*;
pub use distance::*;
pub use format::*;
pub use particles::*;
pub use scale::*;
