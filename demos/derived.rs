use argvise::derive::OptionStore;
use argvise::Command;

#[derive(Debug, Default, OptionStore)]
struct Options {
    #[argvise(tag = "verbose,v", help = "Log every step.")]
    verbose: bool,
    #[argvise(tag = "jobs,j=1", help = "How many jobs to run in parallel.", label = "<count>")]
    jobs: u16,
    #[argvise(tag = "include,I", help = "Add a directory to the search path.", label = "<dir>")]
    include: Vec<String>,
    #[argvise(help = "Scale applied to every input.")]
    scale_factor: f64,
}

fn main() {
    let mut options = Options {
        scale_factor: 1.0,
        ..Options::default()
    };
    let mut command = Command::from_env();

    if let Err(error) = command.parse_store(&mut options) {
        eprintln!("Parse error: {error}");
        std::process::exit(2);
    }

    println!("{options:?}");
    println!("files: {:?}", command.positional_arguments());
}
