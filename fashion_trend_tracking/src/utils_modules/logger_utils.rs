use crate::common::*;

#[doc = "Log line layout shared by the file and stdout writers"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        std::thread::current().name().unwrap_or("<unnamed>"),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Writes daily rotated files under `./logs` (ten kept) and mirrors every line to
    stdout. The level comes from `RUST_LOG`, `info` otherwise. The returned handle
    must stay alive for as long as the process logs.
"#]
pub fn set_global_logger() -> LoggerHandle {
    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory("logs")
                        .basename("fashion_trend_tracking"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(log_format)
                .format_for_stdout(log_format)
                .duplicate_to_stdout(Duplicate::All)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
