pub mod check;
pub mod dispatch;
pub mod list;
pub mod play;
pub mod shared;
pub mod show;
