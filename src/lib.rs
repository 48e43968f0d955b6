pub mod component;
pub mod name;
pub mod template;
pub mod utils;
