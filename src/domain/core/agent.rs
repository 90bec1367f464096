use bon::Builder;
use serde::{Deserialize, Serialize};

/// Information about an agent provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProvider {
    pub organization: String,
    pub url: String,
}

/// Capabilities advertised by an agent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentCapabilities {
    #[serde(default)]
    pub streaming: bool,
    #[serde(default, rename = "pushNotifications")]
    pub push_notifications: bool,
    #[serde(default, rename = "stateTransitionHistory")]
    pub state_transition_history: bool,
}

/// A skill provided by an agent with metadata and examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "inputModes")]
    pub input_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "outputModes")]
    pub output_modes: Option<Vec<String>>,
}

/// Card describing an agent's identity, capabilities and skills.
///
/// Fetched from the agent's well-known endpoint and shown to the user;
/// only the fields the client surfaces are modeled here.
///
/// # Example
/// ```rust
/// use a2ui_client::{AgentCard, AgentCapabilities};
///
/// let card = AgentCard::builder()
///     .name("Sales Agent".to_string())
///     .description("Renders sales dashboards".to_string())
///     .url("http://localhost:7860".to_string())
///     .version("1.0.0".to_string())
///     .capabilities(AgentCapabilities::default())
///     .build();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<AgentProvider>,
    pub version: String,
    #[serde(default = "default_protocol_version", rename = "protocolVersion")]
    #[builder(default = default_protocol_version())]
    pub protocol_version: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "iconUrl")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "documentationUrl")]
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub capabilities: AgentCapabilities,
    #[serde(default = "default_input_modes", rename = "defaultInputModes")]
    #[builder(default = default_input_modes())]
    pub default_input_modes: Vec<String>,
    #[serde(default = "default_output_modes", rename = "defaultOutputModes")]
    #[builder(default = default_output_modes())]
    pub default_output_modes: Vec<String>,
    #[serde(default)]
    #[builder(default = Vec::new())]
    pub skills: Vec<AgentSkill>,
}

fn default_input_modes() -> Vec<String> {
    vec!["text".to_string()]
}

fn default_output_modes() -> Vec<String> {
    vec!["text".to_string()]
}

fn default_protocol_version() -> String {
    "1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_card_deserializes_with_defaults() {
        let card: AgentCard = serde_json::from_value(json!({
            "name": "Test Agent",
            "description": "desc",
            "url": "http://localhost:7860",
            "version": "0.1.0",
            "skills": [
                {"id": "charts", "name": "Charts", "description": "Draws charts",
                 "tags": ["viz"], "examples": ["show sales"]}
            ]
        }))
        .unwrap();

        assert_eq!(card.protocol_version, "1.0");
        assert!(!card.capabilities.streaming);
        assert_eq!(card.default_input_modes, vec!["text".to_string()]);
        assert_eq!(card.skills[0].examples.as_ref().unwrap()[0], "show sales");
    }
}
