//! End-to-end bootstrap checks: configuration in, descriptor out.

use github_test_agent::{
    AGENT_NAME, AgentConfig, ConfigError, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TOOL_SERVER_URL, root_agent,
};

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + '_ {
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

#[test]
fn missing_credential_fails_before_any_descriptor() {
    let result = AgentConfig::from_lookup(vars(&[]));
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));

    let result = AgentConfig::from_lookup(vars(&[("API_KEY", "")]));
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn error_message_names_variable_and_remediation() {
    let err = AgentConfig::from_lookup(vars(&[])).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("API_KEY"));
    assert!(msg.contains(".env.template"));
}

#[test]
fn defaults_flow_into_descriptors() {
    let config = AgentConfig::from_lookup(vars(&[("API_KEY", "x")])).unwrap();
    let agent = root_agent(&config);

    assert_eq!(agent.name(), AGENT_NAME);
    assert_eq!(agent.model().model, DEFAULT_MODEL);
    assert_eq!(agent.model().api_key, "x");
    assert_eq!(agent.model().max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(agent.tool_servers()[0].url(), DEFAULT_TOOL_SERVER_URL);
}

#[test]
fn overrides_flow_into_descriptors() {
    let config = AgentConfig::from_lookup(vars(&[
        ("API_KEY", "x"),
        ("MODEL_NAME", "gpt-4o-mini"),
        ("TOOL_SERVER_URL", "http://example:9/sse"),
    ]))
    .unwrap();
    let agent = root_agent(&config);

    assert_eq!(agent.model().model, "gpt-4o-mini");
    assert_eq!(agent.tool_servers()[0].url(), "http://example:9/sse");
}

#[test]
fn agent_carries_exactly_one_tool_server() {
    let config = AgentConfig::from_lookup(vars(&[("API_KEY", "x")])).unwrap();
    assert_eq!(root_agent(&config).tool_servers().len(), 1);
}

#[test]
fn construction_is_idempotent() {
    let config = AgentConfig::from_lookup(vars(&[("API_KEY", "x")])).unwrap();
    assert_eq!(root_agent(&config), root_agent(&config));
}

#[test]
fn model_descriptor_serializes_with_token_bound() {
    let config = AgentConfig::from_lookup(vars(&[("API_KEY", "x")])).unwrap();
    let agent = root_agent(&config);

    let value = serde_json::to_value(agent.model()).unwrap();
    assert_eq!(value["model"], "gpt-4o");
    assert_eq!(value["max_tokens"], 10_000);
}
