pub mod copy_field;
pub mod panel;
