/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::*;
    use crate::query::BELPOST_URL;
    use crate::types::ReportFormat;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Create minimal args for testing
    fn base_args() -> CliArgs {
        CliArgs {
            tracks: PathBuf::from("tracks.txt"),
            format: ReportFormat::Table,
            output: None,
            silent: false,
            retry: 5,
            retry_delay: 0,
            timeout: 30,
            endpoint: Some("http://127.0.0.1:8080/search".to_string()),
            json: None,
            to_address: None,
            from_address: String::new(),
            smtp_user: String::new(),
            smtp_pass: String::new(),
            smtp_server: "127.0.0.1".to_string(),
            smtp_port: 25,
            smtp_tls: false,
        }
    }

    #[test]
    fn test_defaults_resolve_to_stdout_without_mail() {
        let config = build_run_config(&base_args()).expect("Should build config");

        assert_eq!(config.sink, OutputSink::Stdout);
        assert_eq!(config.format, ReportFormat::Table);
        assert_eq!(config.retry, 5);
        assert_eq!(config.retry_delay, Duration::ZERO);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.mail.is_none());
        assert!(config.json_path.is_none());
    }

    #[test]
    fn test_output_file_sink() {
        let mut args = base_args();
        args.output = Some(PathBuf::from("report.txt"));
        let config = build_run_config(&args).unwrap();
        assert_eq!(config.sink, OutputSink::File(PathBuf::from("report.txt")));
    }

    #[test]
    fn test_silent_sink() {
        let mut args = base_args();
        args.silent = true;
        let config = build_run_config(&args).unwrap();
        assert_eq!(config.sink, OutputSink::Silent);
        assert!(config.sink.open().unwrap().is_none());
    }

    #[test]
    fn test_file_sink_opens_for_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let sink = OutputSink::File(path.clone());

        {
            let mut writer = sink.open().unwrap().expect("file sink writes");
            writer.write_all(b"hello\n").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_file_sink_in_missing_directory_fails() {
        let sink = OutputSink::File(PathBuf::from("/nonexistent/dir/report.txt"));
        assert!(sink.open().is_err());
    }

    #[test]
    fn test_endpoint_flag_wins() {
        let config = build_run_config(&base_args()).unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/search");
    }

    #[test]
    fn test_mail_settings_from_args() {
        let mut args = base_args();
        args.to_address = Some("me@example.com".to_string());
        args.smtp_server = "mail.example.com".to_string();
        args.smtp_port = 587;
        args.smtp_user = "me".to_string();
        args.smtp_pass = "secret".to_string();
        args.smtp_tls = true;

        let mail = build_run_config(&args).unwrap().mail.expect("Should have mail settings");
        assert_eq!(mail.to, "me@example.com");
        assert_eq!(mail.from, "me@example.com", "Empty sender falls back to recipient");
        assert_eq!(mail.server, "mail.example.com");
        assert_eq!(mail.port, 587);
        assert_eq!(mail.user, "me");
        assert_eq!(mail.password, "secret");
        assert!(mail.tls);
    }

    #[test]
    fn test_explicit_sender_is_kept() {
        let mut args = base_args();
        args.to_address = Some("me@example.com".to_string());
        args.from_address = "tracker@example.com".to_string();
        let mail = build_run_config(&args).unwrap().mail.unwrap();
        assert_eq!(mail.from, "tracker@example.com");
    }

    #[test]
    fn test_endpoint_resolution_order() {
        assert_eq!(resolve_endpoint(Some("http://a/"), Some("http://b/".to_string())), "http://a/");
        assert_eq!(resolve_endpoint(None, Some("http://b/".to_string())), "http://b/");
        assert_eq!(resolve_endpoint(None, Some("  ".to_string())), BELPOST_URL);
        assert_eq!(resolve_endpoint(None, None), BELPOST_URL);
    }
}
