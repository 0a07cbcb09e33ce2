pub mod bot;
pub mod game;
pub mod session;
