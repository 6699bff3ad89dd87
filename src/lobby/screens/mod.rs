//! Lobby screens.

mod game_over;
mod login;
mod main_menu;
mod role_select;

pub use game_over::GameOverScreen;
pub use login::LoginScreen;
pub use main_menu::MainMenuScreen;
pub use role_select::RoleSelectScreen;
