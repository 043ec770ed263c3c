use std::env;

mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod session;
mod settings;
mod terminal;
mod tui;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    // the menu needs a terminal; piped runs fall through to one-shot output
    match args.len() {
        1 if cli::quiet::stdout_is_tty() => tui::run(),
        _ => cli::run(args).exit(),
    }
}
