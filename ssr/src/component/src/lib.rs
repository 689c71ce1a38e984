pub mod media_slot;
pub mod modal;
pub mod select;
pub mod video_player;
