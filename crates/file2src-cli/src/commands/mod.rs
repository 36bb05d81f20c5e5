pub mod encode;
pub mod lang_resolver;
pub mod langs;
