//! Lobby: login, main menu with scoreboards, role selection and end screens.

mod controller;
mod screen;
mod screens;

pub use controller::LobbyController;
pub use screen::{LobbyContext, Screen, ScreenTransition};
pub use screens::{GameOverScreen, LoginScreen, MainMenuScreen, RoleSelectScreen};
