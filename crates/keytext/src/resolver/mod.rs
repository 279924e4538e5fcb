//! Key resolution: lookup, composed keys, plural forms and placeholders.

mod plural;
mod substitute;
mod translator;

pub use plural::select_form;
pub use substitute::substitute;
pub use translator::Translator;
