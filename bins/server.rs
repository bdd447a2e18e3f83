use std::process::ExitCode;

use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    // 提前加载 .env，使得 RUST_LOG / DATABASE_URL 等环境变量生效
    dotenv().ok();

    let config = match configs::AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // 日志尚未初始化，直接输出到 stderr
            eprintln!("invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let format = config.logging.format.parse().unwrap_or(LogFormat::Compact);
    init_logging(format);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "solicitacao",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = config.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "solicitacao",
        event = "start",
        %service_id,
        pid,
        version,
        threads = config.server.worker_threads.unwrap_or_default(),
        "solicitacao service starting"
    );

    // server::run 内部处理 Ctrl+C / SIGTERM 并优雅停机
    match rt.block_on(server::run(config)) {
        Ok(()) => {
            info!(event = "stop", %service_id, pid, "server stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "run_failed", error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
