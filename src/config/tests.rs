use super::*;

#[test]
fn defaults_match_the_documented_values() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.public_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(settings.server.admin_addr.to_string(), "127.0.0.1:3001");
    assert_eq!(settings.server.graceful_shutdown, Duration::from_secs(30));
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.storage.path, PathBuf::from("data/snsp-store.json"));
    assert_eq!(settings.storage.blogs_key, "snsp_blogs");
    assert_eq!(settings.storage.settings_key, "snsp_settings");
    assert!(!settings.storage.ephemeral);
    assert!(settings.admin.require_session);
    assert_eq!(settings.admin.toast_ttl.get(), 3000);
    assert_eq!(settings.site.public_site_url, "http://127.0.0.1:3000/");
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.public_port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        public_port: Some(4321),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.public_addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_ports_and_ttl_are_rejected_by_key() {
    let mut raw = RawSettings::default();
    raw.server.admin_port = Some(0);
    let err = Settings::from_raw(raw).unwrap_err();
    assert!(matches!(err, LoadError::Invalid { key: "server.admin_port", .. }));

    let mut raw = RawSettings::default();
    raw.admin.toast_ttl_ms = Some(0);
    let err = Settings::from_raw(raw).unwrap_err();
    assert!(matches!(err, LoadError::Invalid { key: "admin.toast_ttl_ms", .. }));
}

#[test]
fn blank_storage_key_is_rejected() {
    let mut raw = RawSettings::default();
    raw.storage.blogs_key = Some("   ".to_string());
    let err = Settings::from_raw(raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid configuration for `storage.blogs_key`: must not be empty"
    );
}

#[test]
fn shared_listener_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.public_port = Some(8080);
    raw.server.admin_port = Some(8080);
    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["snsp-site"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "snsp-site",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--storage-path",
        "/tmp/store.json",
        "--ephemeral",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(
                serve.overrides.storage.storage_path.as_deref(),
                Some(std::path::Path::new("/tmp/store.json"))
            );
            assert_eq!(serve.overrides.storage.ephemeral, Some(true));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_export_arguments() {
    let args = CliArgs::parse_from(["snsp-site", "export", "/tmp/blogs.json"]);

    match args.command.expect("export command") {
        Command::Export(export) => {
            assert_eq!(export.file, std::path::Path::new("/tmp/blogs.json"));
            assert!(export.storage.storage_path.is_none());
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_import_arguments() {
    let args = CliArgs::parse_from([
        "snsp-site",
        "import",
        "--storage-path",
        "/tmp/store.json",
        "--yes",
        "/tmp/blogs.json",
    ]);

    match args.command.expect("import command") {
        Command::Import(import) => {
            assert!(import.yes);
            assert_eq!(import.file, std::path::Path::new("/tmp/blogs.json"));
            assert_eq!(
                import.storage.storage_path.as_deref(),
                Some(std::path::Path::new("/tmp/store.json"))
            );
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn storage_overrides_apply_to_transfer_commands() {
    let mut raw = RawSettings::default();
    raw.apply_storage_overrides(&StorageOverrides {
        storage_path: Some(PathBuf::from("/srv/snsp.json")),
        ephemeral: Some(true),
    });
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.storage.path, PathBuf::from("/srv/snsp.json"));
    assert!(settings.storage.ephemeral);
}
