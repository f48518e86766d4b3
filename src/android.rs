use android_activity::{AndroidApp, MainEvent, PollEvent};
use log::info;
use ndk::trace;

use crate::activity::MainActivity;
use crate::config::Config;
use crate::native::NativeGreeting;

#[no_mangle]
fn android_main(app: AndroidApp) {
    let config = Config::default();
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(config.log_level)
            .with_tag(config.log_tag),
    );

    let _trace;
    if trace::is_trace_enabled() {
        _trace = trace::Section::new("testapp main").unwrap();
    }

    let mut activity = MainActivity::new(NativeGreeting, config);
    activity
        .on_create(None)
        .expect("activity failed to start");
    info!("activity created");

    let mut exit = false;
    while !exit {
        app.poll_events(None, |event| {
            if let PollEvent::Main(main_event) = event {
                match main_event {
                    MainEvent::Resume { .. } => info!("activity active"),
                    MainEvent::Pause => info!("activity paused"),
                    MainEvent::Destroy => {
                        info!("activity destroyed");
                        exit = true;
                    }
                    _ => {}
                }
            }
        });
    }
}
