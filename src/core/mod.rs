pub mod assets;
pub mod gfx;
pub mod input;
pub mod save;
pub mod space;
pub mod timing;
