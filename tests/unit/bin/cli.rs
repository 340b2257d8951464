use super::*;

#[test]
fn limits_default_to_service_defaults() {
    let cli = Cli::try_parse_from(["procimg"]).unwrap();
    assert_eq!(cli.service_config(), ServiceConfig::default());
}

#[test]
fn flags_override_limits() {
    let cli = Cli::try_parse_from([
        "procimg",
        "--host",
        "127.0.0.1",
        "--port",
        "8080",
        "--max-dimension",
        "512",
        "--max-body-bytes",
        "1024",
    ])
    .unwrap();
    assert_eq!(cli.host, "127.0.0.1");
    assert_eq!(cli.port, 8080);
    let config = cli.service_config();
    assert_eq!(config.max_dimension, 512);
    assert_eq!(config.max_body_bytes, 1024);
    assert_eq!(config.simple_max_dimension, 1000);
}

#[test]
fn invalid_port_is_rejected() {
    assert!(Cli::try_parse_from(["procimg", "--port", "99999"]).is_err());
}

#[test]
fn dimensions_beyond_the_rasterizer_range_are_rejected() {
    assert!(Cli::try_parse_from(["procimg", "--max-dimension", "70000"]).is_err());
    assert!(Cli::try_parse_from(["procimg", "--simple-max-dimension", "0"]).is_err());
    let cli = Cli::try_parse_from(["procimg", "--max-dimension", "65535"]).unwrap();
    assert_eq!(cli.max_dimension, 65535);
}
