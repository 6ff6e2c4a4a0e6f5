//! Load a hosts file, select from it, and check the generated SSH config
//! is readable by an SSH config parser.

use std::io::BufReader;

use essh_core::{GENERATED_HEADER, Host, HostRegistry, parse_hosts};
use ssh2_config::{ParseRule, SshConfig};

const HOSTS: &str = r#"
{
  "version": 1,
  "hosts": [
    {
      "name": "web1",
      "config": { "User": "deploy", "Port": "2222", "HostName": "192.168.0.11", "ForwardAgent": true },
      "tags": ["web", "prod"]
    },
    {
      "name": "web2",
      "config": { "HostName": "192.168.0.12", "Port": "22" },
      "tags": ["web"]
    },
    {
      "name": "db1",
      "config": { "HostName": "192.168.0.21", "User": "postgres" },
      "tags": ["db", "prod"],
      "hidden": true
    },
    { "name": "bastion" }
  ]
}
"#;

fn parse_rendered(registry: &HostRegistry) -> SshConfig {
    let bytes = registry.gen_hosts_config().unwrap();
    let mut reader = BufReader::new(bytes.as_slice());
    SshConfig::default()
        .parse(&mut reader, ParseRule::ALLOW_UNKNOWN_FIELDS)
        .unwrap()
}

#[test]
fn test_generated_config_parses_back() {
    let registry = parse_hosts(HOSTS).unwrap();
    let config = parse_rendered(&registry);

    let web1 = config.query("web1");
    assert_eq!(web1.host_name.as_deref(), Some("192.168.0.11"));
    assert_eq!(web1.port, Some(2222));
    assert_eq!(web1.user.as_deref(), Some("deploy"));

    let db1 = config.query("db1");
    assert_eq!(db1.host_name.as_deref(), Some("192.168.0.21"));
    assert_eq!(db1.user.as_deref(), Some("postgres"));
}

#[test]
fn test_generated_config_layout() {
    let registry = parse_hosts(HOSTS).unwrap();
    let rendered = registry.render_hosts_config();

    assert!(rendered.starts_with(GENERATED_HEADER));
    assert!(rendered.contains(
        "\n\nHost web1\n    HostName 192.168.0.11\n    Port 2222\n    User deploy\n"
    ));
    assert!(!rendered.contains("ForwardAgent"));
    // Hidden hosts are still rendered
    assert!(rendered.contains("\nHost db1\n"));
    assert!(rendered.ends_with("\nHost bastion\n\n"));

    let order: Vec<&str> = rendered
        .lines()
        .filter_map(|line| line.strip_prefix("Host "))
        .collect();
    assert_eq!(order, vec!["web1", "web2", "db1", "bastion"]);
}

#[test]
fn test_select_then_render_subset() {
    let registry = parse_hosts(HOSTS).unwrap();

    let selected: HostRegistry = registry
        .hosts_by_names(&["prod", "web1", "bastion"])
        .into_iter()
        .cloned()
        .collect();

    let names: Vec<&str> = selected.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["web1", "db1", "bastion"]);
    assert_eq!(registry.tags(), vec!["db", "prod", "web"]);

    let rendered = selected.render_hosts_config();
    assert!(!rendered.contains("Host web2"));
}

#[test]
fn test_reset_then_reload() {
    let mut registry = parse_hosts(HOSTS).unwrap();
    registry.reset();
    assert_eq!(
        registry.gen_hosts_config().unwrap(),
        format!("{GENERATED_HEADER}\n").into_bytes()
    );

    registry.register(Host::new("h1").with_config("Port", "22"));
    let rendered = registry.render_hosts_config();
    assert_eq!(rendered, format!("{GENERATED_HEADER}\nHost h1\n    Port 22\n\n"));
}
