use argvise::{Command, Error, OptionConfig};

fn run_build(mut command: Command) -> Result<(), Error> {
    command.parse_with(vec![
        OptionConfig::new(["release", "r"]),
        OptionConfig::new(["target", "t"]).takes_argument(),
    ])?;

    println!(
        "build release={} target={:?} in {:?}",
        command.has_option("release"),
        command.option_argument("target"),
        command.positional_arguments()
    );
    Ok(())
}

fn run_clean(mut command: Command) -> Result<(), Error> {
    command.parse()?;
    println!("clean {:?}", command.positional_arguments());
    Ok(())
}

fn run() -> Result<(), Error> {
    let mut command = Command::from_env();
    let sub_command = command.parse_with_until_sub_command(vec![
        OptionConfig::new(["verbose", "v"]),
        OptionConfig::new(["directory", "C"]).takes_argument(),
    ])?;

    if command.has_option("verbose") {
        println!("directory: {:?}", command.option_argument("directory"));
    }

    match sub_command.name() {
        "build" => run_build(sub_command),
        "clean" => run_clean(sub_command),
        "" => {
            eprintln!("usage: {} [-v] [-C DIR] (build | clean) ...", command.name());
            Ok(())
        }
        other => {
            eprintln!("Unknown sub-command '{other}'.");
            Ok(())
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Parse error: {error}");
        std::process::exit(2);
    }
}
