pub mod cors;
pub mod fallback;
