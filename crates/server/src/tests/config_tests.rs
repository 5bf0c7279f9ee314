use super::*;

use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_local_port_and_hosted_provider() {
    let settings = Settings::default();
    assert_eq!(settings.server_bind, "127.0.0.1:5000");
    assert_eq!(settings.model, "moonshotai/kimi-k2-instruct-0905");
    assert!(settings.api_key.is_none());
    assert!(settings.static_dir.is_none());
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file_config(
        &mut settings,
        r#"
bind_addr = "0.0.0.0:8080"
static_dir = "frontend"
model = "llama-3.1-8b-instant"
body_limit_bytes = 1024
"#,
    );

    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.static_dir, Some(PathBuf::from("frontend")));
    assert_eq!(settings.model, "llama-3.1-8b-instant");
    assert_eq!(settings.body_limit_bytes, 1024);
}

#[test]
fn unreadable_file_leaves_settings_untouched() {
    let mut settings = Settings::default();
    apply_file_config(&mut settings, "bind_addr = [");
    assert_eq!(settings.server_bind, Settings::default().server_bind);
}

#[test]
fn app_prefixed_env_wins_over_alias() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[
            ("SERVER_BIND", "127.0.0.1:1"),
            ("APP__BIND_ADDR", "127.0.0.1:2"),
            ("GROQ_API_KEY", "gsk-plain"),
        ]),
    );

    assert_eq!(settings.server_bind, "127.0.0.1:2");
    assert_eq!(settings.api_key.as_deref(), Some("gsk-plain"));
}

#[test]
fn blank_or_invalid_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[("GROQ_API_KEY", "  "), ("APP__BODY_LIMIT_BYTES", "lots")]),
    );

    assert!(settings.api_key.is_none());
    assert_eq!(settings.body_limit_bytes, Settings::default().body_limit_bytes);
}
