pub mod charset;
pub mod config;
pub mod generator;
pub mod keyboard;
pub mod keystream;
pub mod ui;

pub use charset::CharClass;
pub use config::{ConfigError, GenerationConfig, Quotas};
pub use generator::{GenerateError, generate};
pub use keyboard::{AdjacencyTable, KeyRow, Layout, LayoutError, QWERTY};
pub use keystream::Keystream;
