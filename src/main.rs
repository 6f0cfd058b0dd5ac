use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, info, warn};

// 从 lib.rs 导入模块
use peer_review::config::AppConfig;
use peer_review::errors::Result;
use peer_review::runtime::lifetime;
use peer_review::services::DashboardService;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let exit_code = match run(start_datetime).await {
        Ok(()) => 0,
        Err(e) => {
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            1
        }
    };

    // 退出前刷新非阻塞日志写入器，否则排队中的日志会丢失
    drop(guard);
    std::process::exit(exit_code);
}

async fn run(start_datetime: chrono::DateTime<chrono::Utc>) -> Result<()> {
    let startup = lifetime::startup::prepare_startup()
        .await
        .inspect_err(|e| error!("Startup failed: {}", e))?;

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    let dashboard = DashboardService::new(startup.storage.clone());
    print_overview(&dashboard, &startup)
        .await
        .inspect_err(|e| error!("Failed to build overview: {}", e))
}

/// 输出整体进度以及每位用户的提交和评审任务
async fn print_overview(
    dashboard: &DashboardService,
    startup: &lifetime::startup::StartupContext,
) -> Result<()> {
    let summary = dashboard.progress().await?;
    info!(
        teachers = summary.teachers,
        students = summary.students,
        assignments = summary.assignments,
        submissions = summary.submissions,
        pending_reviews = summary.pending_reviews,
        done_reviews = summary.done_reviews,
        "Progress summary"
    );

    if let Some(user) = startup.storage.get_current_user().await? {
        info!("Current session user: {} ({})", user.name, user.role);
    }

    for user in startup.storage.list_users().await? {
        let submissions = dashboard.my_submissions(&user.id).await?;
        let reviews = dashboard.my_reviews(&user.id).await?;
        let pending = reviews.iter().filter(|r| r.review.is_pending()).count();
        info!(
            "{} [{}]: {} submission(s), {} review(s) assigned, {} pending",
            user.name,
            user.role,
            submissions.len(),
            reviews.len(),
            pending
        );
    }

    Ok(())
}
