use crate::models::BodyProfile;

pub const BACKGROUND_COLOR: &str = "#fffcf0";
pub const ASPECT_RATIO: &str = "9:16";
pub const IMAGE_SIZE: &str = "2K";

/// Instruction for generating a full-body avatar from a selfie and body
/// measurements. Deterministic template substitution, no validation.
pub fn avatar_prompt(profile: &BodyProfile) -> String {
    format!(
        r#"
Based on the selfie and the clothes I provide, generate an ultra-realistic human model with the following characteristics:

    Specifications:
        - Physical characteristics
            Gender: {sexe}
            Height: {taille_cm} cm
            Weight: {poids_kg} kg
            BMI: {imc}
            Upper body size: {taille_haut}
            Lower body size: {taille_bas}

        - Posture
            Body straight, arms along the body, neutral pose
            Neutral facial expression
            Hair : same like the selfie
            No jewelry or accessories

        - Background and image quality
            Soft, even studio lighting
            High-definition photorealistic rendering
            Uniforme background with color {background}, no graphic elements, no shadows, no decor, no text

        - Clothing
            Black t-shirt, White straight-cut pants, black leather shoes are the base clothing
            Add or replace the equivalent clothing with the one provide (no nudity)

The avatar should look like a professional model photo, maintaining the person's face identity while creating a proportionally accurate full-body representation.
"#,
        sexe = profile.sexe.as_str(),
        taille_cm = profile.taille_cm,
        poids_kg = profile.poids_kg,
        imc = profile.bmi(),
        taille_haut = profile.taille_haut,
        taille_bas = profile.taille_bas,
        background = BACKGROUND_COLOR,
    )
}

/// Instruction for transferring the provided garment onto an existing avatar.
pub fn tryon_prompt() -> String {
    format!(
        r#"
Based on the model I provide, replace the existing clothes with the clothing item provided, following these rules:

- Posture:
    Must remain the same and adapted to the clothing item

- Face:
    Must remain exactly the same
    Respect all hair details

- Clothing:
    Apply the provided clothing item to the model
    Adjust the size to fit the model properly
    Maintain the original style and cut of the clothing
    Ensure proper layering if applicable
    Keep any original clothes that don't conflict with the new item

- Background and image quality:
    Soft, even studio lighting
    High-definition photorealistic rendering
    Definition: Portrait {aspect_ratio} (1080x1920 pixels)
    Uniform background with color {background}, no graphic elements, no shadows, no decor, no text
"#,
        aspect_ratio = ASPECT_RATIO,
        background = BACKGROUND_COLOR,
    )
}
