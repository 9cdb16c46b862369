// SPDX-License-Identifier: MPL-2.0
use iced_notifier::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        max_concurrent: args.opt_value_from_str("--max-concurrent").unwrap_or_else(|err| {
            eprintln!("Invalid --max-concurrent: {err}");
            None
        }),
        config_path: args
            .opt_value_from_str::<_, PathBuf>("--config")
            .unwrap_or_else(|err| {
                eprintln!("Invalid --config: {err}");
                None
            }),
    };

    app::run(flags)
}
