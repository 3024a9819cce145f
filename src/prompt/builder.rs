use serde_json::Value;

use crate::types::{
    Content, GenerateContentRequest, GenerationConfig, Part, SpeechConfig,
};

/// Assembles a single-turn `generateContent` request.
///
/// ```
/// use songcraft_ai::prompt::PromptBuilder;
///
/// let req = PromptBuilder::new()
///     .system_instruction("Answer in Japanese.")
///     .text("Hello")
///     .build();
/// assert_eq!(req.contents.len(), 1);
/// assert!(req.generation_config.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    system_instruction: Option<String>,
    parts: Vec<Part>,
    config: GenerationConfig,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::text(text));
        self
    }

    /// Attach a base64 payload (audio, image) to the user turn.
    pub fn inline_data(mut self, mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        self.parts.push(Part::inline(mime_type, data));
        self
    }

    /// Ask for `application/json` output constrained by `schema`.
    pub fn json_schema(mut self, schema: Value) -> Self {
        self.config.response_mime_type = Some("application/json".to_string());
        self.config.response_schema = Some(schema);
        self
    }

    pub fn response_modalities(mut self, modalities: &[&str]) -> Self {
        self.config.response_modalities =
            Some(modalities.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn voice(mut self, voice_name: impl Into<String>) -> Self {
        self.config.speech_config = Some(SpeechConfig::prebuilt(voice_name));
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    pub fn build(self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::with_parts(Some("user"), self.parts)],
            system_instruction: self.system_instruction.map(Content::system),
            generation_config: if self.config.is_empty() {
                None
            } else {
                Some(self.config)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parts_keep_order() {
        let req = PromptBuilder::new()
            .inline_data("audio/wav", "UklGRg==")
            .text("analyze")
            .build();
        let parts = &req.contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].inline_data.as_ref().unwrap().mime_type, "audio/wav");
        assert_eq!(parts[1].text.as_deref(), Some("analyze"));
    }

    #[test]
    fn test_json_schema_sets_mime_type() {
        let req = PromptBuilder::new()
            .text("x")
            .json_schema(json!({"type": "OBJECT"}))
            .build();
        let cfg = req.generation_config.unwrap();
        assert_eq!(cfg.response_mime_type.as_deref(), Some("application/json"));
        assert_eq!(cfg.response_schema.unwrap()["type"], "OBJECT");
    }

    #[test]
    fn test_speech_config() {
        let req = PromptBuilder::new()
            .text("hi")
            .response_modalities(&["AUDIO"])
            .voice("Kore")
            .build();
        let cfg = req.generation_config.unwrap();
        assert_eq!(cfg.response_modalities.unwrap(), vec!["AUDIO"]);
        assert_eq!(
            cfg.speech_config.unwrap().voice_config.prebuilt_voice_config.voice_name,
            "Kore"
        );
    }

    #[test]
    fn test_system_instruction_has_no_role() {
        let req = PromptBuilder::new().system_instruction("persona").text("q").build();
        let sys = req.system_instruction.unwrap();
        assert!(sys.role.is_none());
        assert_eq!(sys.text().as_deref(), Some("persona"));
    }
}
