pub mod composite;
pub mod css;
pub mod hex;
pub mod hls;
pub mod wcag;
