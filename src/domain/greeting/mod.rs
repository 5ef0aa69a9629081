pub mod handler;
pub mod i18n;

pub use i18n::{Locale, RequestLocale};
