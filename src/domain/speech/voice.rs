use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Voice gender requested from the speech provider.
/// Wire form is the provider convention: "FEMALE" / "MALE".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoiceGender {
    Female,
    Male,
}

impl VoiceGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceGender::Female => "FEMALE",
            VoiceGender::Male => "MALE",
        }
    }
}

impl std::fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VoiceGender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FEMALE" => Ok(VoiceGender::Female),
            "MALE" => Ok(VoiceGender::Male),
            other => Err(format!(
                "Invalid \"gender\": expected FEMALE or MALE, got \"{}\"",
                other
            )),
        }
    }
}
