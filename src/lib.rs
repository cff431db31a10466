pub mod config;
pub mod events;
pub mod gui;
pub mod labels;
pub mod speed;
pub mod sys;
