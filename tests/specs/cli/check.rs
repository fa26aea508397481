//! `jmsra check`: activation validation.

use crate::prelude::*;

#[test]
fn valid_config_passes() {
    Project::with_config(
        r#"
[connection]
client_id = "connectionClientId"

[activation.orders]
destination = "orders"
destination_type = "topic"
default_client_id = true
subscription_durability = "durable"
subscription_name = "orders-sub"

[activation.audit]
destination = "audit"
"#,
    )
    .jmsra()
    .args(&["check"])
    .passes()
    .stdout_eq("ok: 2 activations\n");
}

#[test]
fn invalid_activations_are_listed() {
    Project::with_config(
        r#"
[activation.orders]
destination = "orders"
subscription_durability = "durable"
"#,
    )
    .jmsra()
    .args(&["check"])
    .fails()
    .stdout_has("orders: invalid activation: durable subscriptions require a topic destination")
    .stdout_has("subscription_name")
    .stderr_has("Error: 1 invalid activation(s)");
}

#[test]
fn conflicting_client_id_sources_rejected() {
    Project::with_config(
        r#"
[activation.orders]
destination = "orders"
default_client_id = true
client_id = "configuredClientId"
"#,
    )
    .jmsra()
    .args(&["check"])
    .fails()
    .stderr_has("client_id cannot be combined with default_client_id = true");
}

#[test]
fn missing_config_fails() {
    Project::empty()
        .jmsra()
        .args(&["check"])
        .fails()
        .stderr_has("cannot load adapter config jmsra.toml");
}

#[test]
fn json_report() {
    let run = Project::with_config("[activation.audit]\ndestination = \"\"\n")
        .jmsra()
        .args(&["check", "-o", "json"])
        .fails();
    let json = run.stdout_json();
    assert_eq!(json["activations"], 1);
    assert_eq!(json["problems"][0]["activation"], "audit");
}
