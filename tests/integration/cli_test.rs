use statline::cli::build_cli;
use statline::commands::notify::message_from;
use std::path::PathBuf;

#[test]
fn test_words_are_joined_with_single_spaces() {
    let matches = build_cli()
        .try_get_matches_from(["statline", "build", "failed", "on", "ci"])
        .unwrap();
    assert!(!matches.get_flag("daemon"));
    assert_eq!(message_from(&matches), "build failed on ci");
}

#[test]
fn test_no_words_is_empty_message() {
    let matches = build_cli().try_get_matches_from(["statline"]).unwrap();
    assert_eq!(message_from(&matches), "");
}

#[test]
fn test_words_after_the_first_may_look_like_flags() {
    let matches = build_cli()
        .try_get_matches_from(["statline", "tests", "-d", "--broken"])
        .unwrap();
    assert!(!matches.get_flag("daemon"));
    assert_eq!(message_from(&matches), "tests -d --broken");
}

#[test]
fn test_daemon_flag_and_paths() {
    let matches = build_cli()
        .try_get_matches_from([
            "statline",
            "-d",
            "--socloc",
            "/tmp/ctl.sock",
            "--fifoloc",
            "/tmp/fifos",
        ])
        .unwrap();

    assert!(matches.get_flag("daemon"));
    assert_eq!(
        matches.get_one::<PathBuf>("socket"),
        Some(&PathBuf::from("/tmp/ctl.sock"))
    );
    assert_eq!(
        matches.get_one::<PathBuf>("fifo-dir"),
        Some(&PathBuf::from("/tmp/fifos"))
    );
}

#[test]
fn test_daemon_does_not_take_a_message() {
    assert!(build_cli()
        .try_get_matches_from(["statline", "-d", "hello"])
        .is_err());
}

#[test]
fn test_unreachable_daemon_fails_with_socket_in_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let socket = temp_dir.path().join("absent.sock");
    let matches = build_cli()
        .try_get_matches_from(["statline", "hello"])
        .unwrap();
    let config = statline::Config::default().with_overrides(Some(socket.clone()), None);

    let err = statline::commands::notify::execute(&matches, &config).unwrap_err();
    assert!(err.to_string().contains(&socket.display().to_string()), "{:#}", err);
    assert!(err.chain().count() >= 2, "{:#}", err);
}
