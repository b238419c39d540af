/*
* Internationalization: supported locales, Accept-Language resolution
* and message-key translation.
*/

pub mod locale;
pub mod translator;

pub use locale::{resolve_locale, Locale, RequestLocale};
pub use translator::Translator;
