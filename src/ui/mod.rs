pub mod actors;
pub mod anim;
pub mod color;
pub mod components;
pub mod compose;
pub mod font;
pub mod layout;
