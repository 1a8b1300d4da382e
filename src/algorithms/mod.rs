pub mod dispatch;
pub mod network;
