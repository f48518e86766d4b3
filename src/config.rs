use log::LevelFilter;

/// Runtime settings for the activity and its logger.
#[derive(Debug, Clone)]
pub struct Config {
    /// Exclusive upper bound of the self-test loop.
    pub count: i64,
    pub log_level: LevelFilter,
    pub log_tag: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 10,
            log_level: LevelFilter::Info,
            log_tag: "testapp",
        }
    }
}
