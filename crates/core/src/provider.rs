#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

#[derive(Clone, Debug, Default)]
pub enum Provider {
    #[default]
    Gemini,
}

pub struct ProviderConfig {
    pub api_base: &'static str,
    pub default_model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Gemini => ProviderConfig {
                api_base: "https://generativelanguage.googleapis.com/v1beta",
                default_model: "gemini-2.5-flash",
                env_var: "GEMINI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
        }
    }

    /// Endpoint for a single non-streaming generation call.
    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config().api_base, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_includes_model() {
        let url = Provider::Gemini.generate_url("gemini-2.5-flash");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
