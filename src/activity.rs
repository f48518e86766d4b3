use log::info;

use crate::arith::{self_test, SelfTestReport};
use crate::config::Config;
use crate::error::StartupError;
use crate::view::{Resources, Window, R};

/// Supplies the display string that the native library provides.
pub trait StringSource {
    fn string_from_jni(&self) -> String;
}

impl<F> StringSource for F
where
    F: Fn() -> String,
{
    fn string_from_jni(&self) -> String {
        self()
    }
}

/// The application's entry activity.
pub struct MainActivity<S> {
    window: Window,
    native: S,
    config: Config,
}

impl<S: StringSource> MainActivity<S> {
    pub fn new(native: S, config: Config) -> Self {
        Self::with_resources(native, config, Resources::app())
    }

    pub fn with_resources(native: S, config: Config, resources: Resources) -> Self {
        Self {
            window: Window::new(resources),
            native,
            config,
        }
    }

    /// Called once by the host when the activity is created. `saved_state`
    /// is whatever the host restored from a previous instance, if anything.
    pub fn on_create(&mut self, saved_state: Option<&[u8]>) -> Result<SelfTestReport, StartupError> {
        info!("on_create, restored state: {:?}", saved_state);
        self.window.set_content_view(R::layout::ACTIVITY_MAIN)?;

        let tv = self.window.find_view_by_id(R::id::SAMPLE_TEXT)?;
        tv.set_text(self.native.string_from_jni());
        info!("sample_text: {}", tv.text());

        Ok(self.test())
    }

    /// Runs the arithmetic self-test and reports both sums.
    pub fn test(&self) -> SelfTestReport {
        let report = self_test(self.config.count);
        for line in &report.lines() {
            info!("{}", line);
            println!("{}", line);
        }
        report
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}
