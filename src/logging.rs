use tracing_subscriber::EnvFilter;

/// `-v` 횟수를 기본 로그 레벨로 바꾼다.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// stderr 로 출력하는 구독자를 설치한다. `RUST_LOG`가 있으면 그 값을 우선한다.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    // 테스트 등에서 이미 설치된 경우는 무시한다.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
