use image::DynamicImage;

use crate::{
    error::{Result, VtoError},
    gemini::GeminiClient,
    imaging::{self, TempImageFile},
    models::{SynthesisRequest, VtoRequestWithSelfie},
    prompt,
};

/// With-avatar workflow: one synthesis call turning {avatar, garment} into
/// the final try-on image, returned as a PNG data URI.
pub async fn run_with_avatar(
    client: &GeminiClient,
    avatar_base64: &str,
    vetement_base64: &str,
) -> Result<String> {
    let avatar = TempImageFile::from_base64(avatar_base64, "model_")?;
    let garment = TempImageFile::from_base64(vetement_base64, "clothing_")?;

    let (aw, ah) = avatar.dimensions();
    let (gw, gh) = garment.dimensions();
    log::info!("Generating try-on (model {}x{}, garment {}x{})", aw, ah, gw, gh);

    let response = client
        .image()
        .generate(SynthesisRequest {
            images: vec![avatar.path().to_path_buf(), garment.path().to_path_buf()],
            prompt: prompt::tryon_prompt(),
            model_id: None,
            aspect_ratio: None,
            image_size: None,
        })
        .await?;

    let generated = decode_generated(&response.image_data)?;
    imaging::image_to_data_uri(&generated)
}

/// With-selfie workflow: generate an avatar from the selfie and measurements,
/// then chain into the with-avatar workflow. The intermediate avatar never
/// leaves the process.
pub async fn run_with_selfie(
    client: &GeminiClient,
    request: &VtoRequestWithSelfie,
) -> Result<String> {
    let profile = request.profile();
    log::info!(
        "Measurements: {}, {}cm, {}kg (BMI {})",
        profile.sexe.as_str(),
        profile.taille_cm,
        profile.poids_kg,
        profile.bmi()
    );

    log::info!("1. Generating avatar from selfie...");
    let selfie = TempImageFile::from_base64(&request.selfie_base64, "selfie_")?;
    let avatar_response = client
        .image()
        .generate(SynthesisRequest {
            images: vec![selfie.path().to_path_buf()],
            prompt: prompt::avatar_prompt(&profile),
            model_id: None,
            aspect_ratio: None,
            image_size: None,
        })
        .await?;

    let avatar_image = decode_generated(&avatar_response.image_data)?;
    let avatar_base64 = imaging::image_to_data_uri(&avatar_image)?;

    log::info!("2. Generating try-on with the new avatar...");
    run_with_avatar(client, &avatar_base64, &request.vetement_base64).await
}

/// An undecodable payload coming back from the model is a generation fault,
/// not a client-input one.
fn decode_generated(image_data: &str) -> Result<DynamicImage> {
    imaging::decode_base64_image(image_data)
        .map_err(|e| VtoError::Generation(format!("undecodable image from Gemini: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    #[test]
    fn test_decode_generated_maps_to_generation_error() {
        let err = decode_generated("definitely-not-base64!!!").unwrap_err();
        assert!(matches!(err, VtoError::Generation(_)));
    }

    #[test]
    fn test_decode_generated_accepts_png_payload() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();

        let decoded = decode_generated(&STANDARD.encode(buffer.get_ref())).unwrap();
        assert_eq!(decoded.width(), 2);
    }
}
