mod filter;
mod flat_map;
mod map;
mod take;

pub use filter::*;
pub use flat_map::*;
pub use map::*;
pub use take::*;
