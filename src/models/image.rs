use std::path::PathBuf;

/// One synthesis call: file-backed source images plus the trailing text prompt.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub images: Vec<PathBuf>,
    pub prompt: String,
    pub model_id: Option<String>,
    pub aspect_ratio: Option<String>,
    pub image_size: Option<String>,
}

#[derive(Debug)]
pub struct SynthesisResponse {
    pub image_data: String, // Base64 encoded
    pub model: String,
}
