pub mod clipboard;
pub mod components;
pub mod icons;
pub mod toast;
