pub mod attachment;
pub mod conversation;
pub mod detection;
pub mod sampling;
