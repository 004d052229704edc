pub mod builder;
pub mod core;
pub mod exports;
pub mod mock;
pub mod module;
