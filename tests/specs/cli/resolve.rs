//! `jmsra resolve`: connection identity per activation.

use crate::prelude::*;

const CONFIG: &str = r#"
[connection]
server_url = "vm://localhost?broker.persistent=false"
client_id = "connectionClientId"

[activation.default-id]
destination = "orders"
destination_type = "topic"
default_client_id = true
subscription_durability = "durable"
subscription_name = "orders-sub"

[activation.configured-id]
destination = "audit"
client_id = "configuredClientId"

[activation.null-id]
destination = "audit"
"#;

const NO_DEFAULT: &str = r#"
[activation.default-id]
destination = "orders"
destination_type = "topic"
default_client_id = true
subscription_durability = "durable"
subscription_name = "orders-sub"
"#;

#[test]
fn default_client_id_from_connection() {
    Project::with_config(CONFIG)
        .jmsra()
        .args(&["resolve", "default-id"])
        .passes()
        .stdout_eq(
            "activation: default-id\nclient_id: connectionClientId\nsource: connection default\n",
        );
}

#[test]
fn configured_client_id_from_activation() {
    Project::with_config(CONFIG)
        .jmsra()
        .args(&["resolve", "configured-id"])
        .passes()
        .stdout_eq("activation: configured-id\nclient_id: configuredClientId\nsource: activation\n");
}

#[test]
fn blank_default_client_id_resolves_to_none() {
    let config = format!("[connection]\nclient_id = \"\"\n{NO_DEFAULT}");
    Project::with_config(&config)
        .jmsra()
        .args(&["resolve", "default-id"])
        .passes()
        .stdout_has("client_id: <none>");
}

#[test]
fn no_client_ids_resolve_to_none_with_warning() {
    Project::with_config(NO_DEFAULT)
        .jmsra()
        .args(&["resolve", "default-id"])
        .passes()
        .stdout_has("client_id: <none>")
        .stderr_has("durable subscription on a connection without client id");
}

#[test]
fn null_configured_client_id_resolves_to_none() {
    Project::with_config(CONFIG)
        .jmsra()
        .args(&["resolve", "null-id"])
        .passes()
        .stdout_has("client_id: <none>")
        .stdout_has("source: activation")
        .stderr_lacks("WARN");
}

#[test]
fn json_output() {
    let run = Project::with_config(CONFIG)
        .jmsra()
        .args(&["resolve", "default-id", "-o", "json"])
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["activation"], "default-id");
    assert_eq!(json["client_id"], "connectionClientId");
    assert_eq!(json["source"], "connection_default");
}

#[test]
fn json_output_null_client_id() {
    let run = Project::with_config(CONFIG)
        .jmsra()
        .args(&["resolve", "null-id", "-o", "json"])
        .passes();
    assert!(run.stdout_json()["client_id"].is_null());
}

#[test]
fn env_overrides_connection_client_id() {
    Project::with_config(CONFIG)
        .jmsra()
        .args(&["resolve", "default-id"])
        .env("JMSRA_CLIENT_ID", "fromEnv")
        .passes()
        .stdout_has("client_id: fromEnv");
}

#[test]
fn reject_policy_fails_durable_without_identity() {
    let config = format!("[connection]\ndurable_without_client_id = \"reject\"\n{NO_DEFAULT}");
    Project::with_config(&config)
        .jmsra()
        .args(&["resolve", "default-id"])
        .fails()
        .stderr_has("requires a client id");
}

#[test]
fn unknown_activation_fails() {
    Project::with_config(CONFIG)
        .jmsra()
        .args(&["resolve", "nope"])
        .fails()
        .stderr_has("Error: unknown activation 'nope'");
}

#[test]
fn config_flag_and_env_locate_config() {
    let project = Project::with_config(CONFIG);
    let elsewhere = Project::empty();

    cli()
        .pwd(elsewhere.path())
        .args(&["resolve", "configured-id", "--config"])
        .args(&[project.config_path().to_str().unwrap()])
        .passes()
        .stdout_has("client_id: configuredClientId");

    cli()
        .pwd(elsewhere.path())
        .env("JMSRA_CONFIG", project.config_path())
        .args(&["resolve", "configured-id"])
        .passes()
        .stdout_has("client_id: configuredClientId");
}
