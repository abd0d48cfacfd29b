pub mod annotate;
pub mod cache;
pub mod preprocess;
pub mod script;
pub mod vocabulary;
