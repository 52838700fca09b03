pub mod app_info;
pub mod enums;
pub mod player_count;
