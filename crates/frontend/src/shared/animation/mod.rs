pub mod frame_loop;
pub mod spring;

pub use frame_loop::FrameLoop;
pub use spring::Spring;
