use argvise::{Command, Error, Help, Kind, Layout, OptionConfig};

fn main() {
    let mut command = Command::from_env();
    let result = command.parse_with(vec![
        OptionConfig::new(["help", "h"]).description("Show this help message and exit."),
        OptionConfig::new(["verbose", "v"]).description("Log every step."),
        OptionConfig::new(["jobs", "j"])
            .takes_argument()
            .defaults(["1"])
            .help_label("<count>")
            .validator(|store_key, name, argument| {
                argument
                    .parse::<u16>()
                    .map(|_| ())
                    .map_err(|cause| Error::invalid_argument(store_key, name, argument, Kind::Uint, cause))
            })
            .description("How many jobs to run in parallel."),
        OptionConfig::new(["include", "I"])
            .store_key("includes")
            .takes_argument()
            .array()
            .help_label("<dir>")
            .description("Add a directory to the search path. May be repeated."),
    ]);

    if command.has_option("help") {
        let configs = command.configs().unwrap_or_default();
        Help::terminal()
            .add_text(format!("usage: {} [options] FILE...", command.name()), Layout::new())
            .add_text("options:", Layout::new())
            .add_options(configs, Layout::new().left_margin(2))
            .print();
        return;
    }

    if let Err(error) = result {
        eprintln!("Parse error: {error}");
        std::process::exit(2);
    }

    println!("verbose: {}", command.has_option("verbose"));
    println!("jobs: {}", command.option_argument("jobs"));
    println!("includes: {:?}", command.option_arguments("includes").unwrap_or_default());
    println!("files: {:?}", command.positional_arguments());
}
