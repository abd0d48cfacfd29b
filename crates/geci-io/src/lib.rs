pub mod clipboard;
pub mod stdin;
