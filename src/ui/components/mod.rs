pub mod hint;
pub mod menu_list;
pub mod text_panel;
