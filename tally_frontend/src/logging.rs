use std::path::Path;

pub fn setup_logger(log_file: &Path) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("tally", log::LevelFilter::Debug)
        .level_for("tally_backend", log::LevelFilter::Debug)
        .level_for("tally_frontend", log::LevelFilter::Debug)
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}
