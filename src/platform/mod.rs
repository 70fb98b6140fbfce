//! Platform tag computation.
//!
//! Turns host metadata into a sanitized tag like `linux_ubuntu_14_04_x86_64`,
//! suitable for embedding in package filenames.

mod resolver;
mod sanitize;

pub use resolver::default_platform_name;
pub use sanitize::sanitize_platform;
