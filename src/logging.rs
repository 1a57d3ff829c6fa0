use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 콘솔 로거를 초기화한다. 프롬프트와 섞이지 않도록 stderr로만 쓴다.
///
/// `RUST_LOG`가 있으면 그 값을 우선한다.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "everyday_toolbox=debug"
    } else {
        "everyday_toolbox=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 이미 설치된 구독자가 있으면 그대로 둔다.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
