#![allow(missing_docs)]
pub mod portable;

pub use portable::{FALLBACK_HTML, ImageCdn, RenderOptions, render, render_value};
