mod replace;
mod replacements;
mod value;

pub use replace::Replace;
pub use replacements::Replacements;
pub use value::Value;
