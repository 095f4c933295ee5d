// src/narration.rs

//! Boundary to the decorative narration service. The actual text model lives
//! with the renderer; the core only owns the prompt, the fallbacks and the
//! rule that narration can never fail into, or stall, the simulation. Callers
//! invoke [`Narrator::generate`] fire-and-forget, off the tick path.

use log::warn;
use thiserror::Error;

/// Canonical scene blurb fed to the narrator by the showcase UI.
pub const SCENE_DESCRIPTION: &str = "An autumn mountain voxel world with vibrant red, orange, \
     and yellow leaves flying in the wind, a flowing blue river, wandering wildlife, under a \
     golden sunset.";

pub const FALLBACK_NO_KEY: &str =
    "Please configure your API key to hear the whispers of nature.";
pub const FALLBACK_SILENCE: &str = "The leaves rustle silently...";
pub const FALLBACK_ERROR: &str = "The wind is too loud to hear the spirits today.";

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("narration credentials are not configured")]
    MissingCredentials,
    #[error("narration service failed: {0}")]
    Service(String),
}

/// The external text-completion service.
pub trait NarrationBackend {
    fn complete(&self, prompt: &str) -> Result<String, NarrationError>;
}

/// Wraps a backend and absorbs every failure into a fixed line.
pub struct Narrator {
    backend: Option<Box<dyn NarrationBackend>>,
}

impl Narrator {
    pub fn new(backend: impl NarrationBackend + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
        }
    }

    /// A narrator with no credentials configured.
    pub fn disconnected() -> Self {
        Self { backend: None }
    }

    /// Produce one line of narration for the scene. Never fails.
    pub fn generate(&self, scene: &str) -> String {
        let Some(backend) = &self.backend else {
            return FALLBACK_NO_KEY.to_owned();
        };
        match backend.complete(&prompt_for(scene)) {
            Ok(text) if text.trim().is_empty() => FALLBACK_SILENCE.to_owned(),
            Ok(text) => text,
            Err(NarrationError::MissingCredentials) => FALLBACK_NO_KEY.to_owned(),
            Err(err) => {
                warn!("narration request failed: {err}");
                FALLBACK_ERROR.to_owned()
            }
        }
    }
}

fn prompt_for(scene: &str) -> String {
    format!(
        "Write a very short, haiku-style or poetic sentence about this scene: {scene}. \
         Keep it under 20 words. Do not include quotes."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;
    impl NarrationBackend for Echo {
        fn complete(&self, prompt: &str) -> Result<String, NarrationError> {
            Ok(format!("echo: {prompt}"))
        }
    }

    struct Broken;
    impl NarrationBackend for Broken {
        fn complete(&self, _prompt: &str) -> Result<String, NarrationError> {
            Err(NarrationError::Service("timeout".into()))
        }
    }

    struct Mute;
    impl NarrationBackend for Mute {
        fn complete(&self, _prompt: &str) -> Result<String, NarrationError> {
            Ok("  ".into())
        }
    }

    #[test]
    fn missing_credentials_fall_back() {
        let narrator = Narrator::disconnected();
        assert_eq!(narrator.generate(SCENE_DESCRIPTION), FALLBACK_NO_KEY);
    }

    #[test]
    fn backend_errors_fall_back() {
        let narrator = Narrator::new(Broken);
        assert_eq!(narrator.generate(SCENE_DESCRIPTION), FALLBACK_ERROR);
    }

    #[test]
    fn blank_completions_fall_back() {
        let narrator = Narrator::new(Mute);
        assert_eq!(narrator.generate(SCENE_DESCRIPTION), FALLBACK_SILENCE);
    }

    #[test]
    fn working_backend_passes_through_with_the_scene_in_the_prompt() {
        let narrator = Narrator::new(Echo);
        let line = narrator.generate("a quiet river");
        assert!(line.starts_with("echo: "));
        assert!(line.contains("a quiet river"));
        assert!(line.contains("under 20 words"));
    }
}
