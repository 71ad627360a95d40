//! Run configuration
//!
//! - `course_map` - the JSON file pairing Canvas courses with Notion relation ids
//! - `env` - credentials, endpoints and property names read from the environment

pub mod course_map;
pub mod env;

pub use course_map::{
    load_course_mappings, parse_course_mappings, CourseMapping, DEFAULT_COURSE_FILE,
};
pub use env::{Credentials, Endpoints, EnvSettings, StoreSchema};
