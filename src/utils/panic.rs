use std::panic;
use std::process;

use better_panic::Settings;
use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;
use tracing::error;

use crate::{
    infrastructure::tui::{real::RealTui, TuiLike},
    utils::paths::get_data_dir,
};

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug in {} {}. The log in {} may help to track it down.",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            get_data_dir().display()
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        // Give the terminal back before anything is printed
        if let Ok(mut t) = RealTui::new() {
            if let Err(r) = t.exit() {
                error!("Unable to exit Terminal: {r:?}");
            }
        }

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

            let file_path = handle_dump(&meta, panic_info);
            if let Err(e) = print_msg(file_path, &meta) {
                eprintln!("human-panic: printing error message to console failed: {e}");
            }
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }
        let msg = format!("{}", panic_hook.panic_report(panic_info));
        log::error!("Error: {}", strip_ansi_escapes::strip_str(msg));

        #[cfg(debug_assertions)]
        {
            // Better Panic stacktrace that is only enabled when debugging.
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
