use raceline::TimelineError;
use raceline::collector::{
    EndpointRegistry, EventBackend, ServerConfig, parse_config, run_collector, run_evaluator,
    run_server,
};

#[derive(Debug, Default)]
struct StubBackend {
    started_with: Option<ServerConfig>,
    fail_start: bool,
}

impl EventBackend for StubBackend {
    fn register(&mut self, registry: &mut EndpointRegistry) {
        registry.put("/1.0/event/put");
        registry.put("/1.0/event/get");
    }

    fn start(
        &mut self,
        config: &ServerConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_start {
            return Err("address already in use".into());
        }
        self.started_with = Some(config.clone());
        Ok(())
    }
}

#[test]
fn collector_defaults_match_the_stock_configuration() {
    let config = ServerConfig::collector_defaults();
    assert_eq!(config.mongo_host, "127.0.0.1");
    assert_eq!(config.mongo_port, 27017);
    assert_eq!(config.mongo_database, "safety_framework");
    assert_eq!(config.mongo_username, None);
    assert_eq!(config.mongo_password, None);
    assert_eq!(config.http_port, 1080);
    assert_eq!(config.udp_port, Some(1180));
}

#[test]
fn evaluator_defaults_drop_the_datagram_listener() {
    let config = ServerConfig::evaluator_defaults();
    assert_eq!(config.http_port, 1081);
    assert_eq!(config.udp_port, None);
    assert_eq!(config.mongo_host, "127.0.0.1");
}

#[test]
fn kebab_case_configuration_maps_deserialize() {
    let config = parse_config(
        r#"{
          "mongo-host": "db.internal",
          "mongo-port": 27018,
          "mongo-database": "events",
          "mongo-username": "svc",
          "mongo-password": "secret",
          "http-port": 8080,
          "udp-port": 8181
        }"#,
    )
    .expect("config");

    assert_eq!(config.mongo_host, "db.internal");
    assert_eq!(config.mongo_username.as_deref(), Some("svc"));
    assert_eq!(config.udp_port, Some(8181));
}

#[test]
fn run_server_registers_endpoints_then_starts() {
    let mut backend = StubBackend::default();
    let registry =
        run_server(&mut backend, &ServerConfig::collector_defaults()).expect("run");

    assert_eq!(registry.endpoints(), ["/1.0/event/put", "/1.0/event/get"]);
    let started = backend.started_with.expect("started");
    assert_eq!(started.http_port, 1080);
}

#[test]
fn startup_failure_propagates_unmodified() {
    let mut backend = StubBackend {
        fail_start: true,
        ..StubBackend::default()
    };
    let err = run_collector(&mut backend).expect_err("must fail");

    match err {
        TimelineError::Server(source) => {
            assert_eq!(source.to_string(), "address already in use");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn wrapper_entry_points_use_their_stock_ports() {
    let mut backend = StubBackend::default();
    run_collector(&mut backend).expect("collector");
    assert_eq!(backend.started_with.as_ref().expect("config").http_port, 1080);

    let mut backend = StubBackend::default();
    run_evaluator(&mut backend).expect("evaluator");
    assert_eq!(backend.started_with.as_ref().expect("config").http_port, 1081);
}
