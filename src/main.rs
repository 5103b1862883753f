use clap::Parser;
use jot::cli::commands::Cli;
use jot::io::config_io::load_config;
use jot::model::{SortMode, TaskList};
use jot::ops::list_ops;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut tasks = TaskList::new();
    for text in &cli.tasks {
        list_ops::add_task(&mut tasks, text.as_str());
    }
    if cli.hide_completed {
        list_ops::toggle_show_completed(&mut tasks);
    }
    if cli.sort_by_name {
        list_ops::set_sort_mode(&mut tasks, SortMode::ByName);
    }

    if let Err(e) = jot::tui::run(config, tasks) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
