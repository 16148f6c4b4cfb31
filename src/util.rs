pub(crate) mod json;
pub mod text;
