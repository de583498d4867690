use serde::{Deserialize, Serialize};

use crate::error::{Result, VtoError};

/// Request for a user with an account (existing avatar)
#[derive(Debug, Clone, Deserialize)]
pub struct VtoRequestWithAvatar {
    pub avatar_base64: String,
    pub vetement_base64: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sexe {
    Homme,
    Femme,
}

impl Sexe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sexe::Homme => "homme",
            Sexe::Femme => "femme",
        }
    }
}

/// Request for a user without an account (avatar generated from a selfie)
#[derive(Debug, Clone, Deserialize)]
pub struct VtoRequestWithSelfie {
    pub selfie_base64: String,
    pub vetement_base64: String,
    pub sexe: Sexe,
    pub taille_cm: u32,
    pub poids_kg: u32,
    pub taille_haut: String,
    pub taille_bas: String,
}

impl VtoRequestWithSelfie {
    pub fn validate(&self) -> Result<()> {
        if !(100..=250).contains(&self.taille_cm) {
            return Err(VtoError::Validation(format!(
                "taille_cm must be between 100 and 250, got {}",
                self.taille_cm
            )));
        }
        if !(30..=300).contains(&self.poids_kg) {
            return Err(VtoError::Validation(format!(
                "poids_kg must be between 30 and 300, got {}",
                self.poids_kg
            )));
        }
        Ok(())
    }

    pub fn profile(&self) -> BodyProfile {
        BodyProfile {
            sexe: self.sexe,
            taille_cm: self.taille_cm,
            poids_kg: self.poids_kg,
            taille_haut: self.taille_haut.clone(),
            taille_bas: self.taille_bas.clone(),
        }
    }
}

/// Body measurements used to parametrize the avatar-generation prompt
#[derive(Debug, Clone)]
pub struct BodyProfile {
    pub sexe: Sexe,
    pub taille_cm: u32,
    pub poids_kg: u32,
    pub taille_haut: String,
    pub taille_bas: String,
}

impl BodyProfile {
    /// BMI = kg / m^2, rounded to 2 decimal places
    pub fn bmi(&self) -> f64 {
        let height_m = self.taille_cm as f64 / 100.0;
        let raw = self.poids_kg as f64 / (height_m * height_m);
        (raw * 100.0).round() / 100.0
    }
}

#[derive(Debug, Serialize)]
pub struct VtoResponse {
    pub success: bool,
    pub image_base64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VtoResponse {
    pub fn ok(image_base64: String, message: impl Into<String>) -> Self {
        VtoResponse {
            success: true,
            image_base64,
            message: Some(message.into()),
        }
    }
}
