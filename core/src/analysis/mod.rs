pub use observation::*;
pub use odds::*;

mod observation;
mod odds;
