pub mod codec;
pub mod temp;

pub use codec::{
    clean_base64, decode_base64, decode_base64_image, decode_image_bytes, image_to_data_uri,
    PNG_DATA_URI_PREFIX,
};
pub use temp::TempImageFile;
