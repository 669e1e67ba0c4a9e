pub mod option_select;
pub mod result_panel;
pub mod submit_button;
