//! Environment management module.
//!
//! This module loads environment variables applied to a conversion. They are
//! read from a Postman environment export or a plain JSON object and fed
//! into [`ConvertOptions::environments`](crate::config::ConvertOptions).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use postman2har::config::ConvertOptions;
//! use postman2har::environment::load_environment_file;
//!
//! let vars = load_environment_file(Path::new("staging.postman_environment.json")).unwrap();
//! let options = ConvertOptions::default().with_environments(vars);
//! ```

pub mod loader;
pub mod models;

pub use loader::{load_environment_file, parse_environment, EnvError};
pub use models::{Environment, EnvironmentValue};
