//! Utility functions and helpers.
//!
//! # Submodules
//!
//! - [`paths`]: Home-directory expansion and abbreviation
//!
//! # Examples
//!
//! ```
//! use majortom::utils::{abbreviate_home, expand_home};
//! use std::path::Path;
//!
//! let home = Path::new("/home/user");
//! assert_eq!(abbreviate_home(&home.join("src"), home), "~/src");
//! assert_eq!(expand_home("~/src", home), home.join("src"));
//! ```

/// Path manipulation and resolution utilities
pub mod paths;

pub use paths::{abbreviate_home, expand_home, home_dir};
