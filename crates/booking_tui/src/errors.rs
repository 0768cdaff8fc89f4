use std::path::Path;
use std::sync::OnceLock;

use color_eyre::Result;
use tracing::error;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the eyre report hook and a panic hook that hands the terminal back
/// before anything is printed. Calling it twice is a no-op.
///
/// `log_file` is named in every panic report so the user knows what to attach.
pub fn init(log_file: &Path) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(panic_section(log_file))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();
        error!("Error: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let metadata = metadata!();
            let dump = handle_dump(&metadata, panic_info);
            // already panicking, a failed print has nowhere to go
            let _ = print_msg(dump, &metadata);
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));

    let _ = INIT.set(());
    Ok(())
}

fn panic_section(log_file: &Path) -> String {
    format!(
        "The booking form crashed. Please report it and attach {}",
        log_file.display()
    )
}

/// Leave raw mode and the alternate screen so the report is readable.
fn restore_terminal() {
    match crate::tui::Tui::new() {
        Ok(mut tui) => {
            if let Err(err) = tui.exit() {
                error!("Unable to exit terminal: {err:?}");
            }
        }
        Err(err) => error!("Unable to reach terminal: {err:?}"),
    }
}
