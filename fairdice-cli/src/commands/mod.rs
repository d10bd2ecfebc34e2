pub mod odds;
pub mod play;
pub mod render;
pub mod verify;

pub use odds::odds;
pub use play::play;
pub use verify::verify;
