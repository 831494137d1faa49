pub mod image;

pub use self::image::{ColorDetector, Inspector};
