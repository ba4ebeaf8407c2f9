pub mod arena;
pub mod collision;
pub mod input;
pub mod movement;
pub mod progression;
pub mod screens;
