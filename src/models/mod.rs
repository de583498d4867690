pub mod gemini;
pub mod image;
pub mod vto;

pub use self::image::*;
pub use self::vto::*;
