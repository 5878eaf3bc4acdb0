use argvise::Command;

fn main() {
    let mut command = Command::from_env();

    if let Err(error) = command.parse() {
        eprintln!("Parse error: {error}");
        std::process::exit(2);
    }

    println!("name: {}", command.name());
    println!("positional: {:?}", command.positional_arguments());

    let mut keys: Vec<&String> = command.options().keys().collect();
    keys.sort();

    for key in keys {
        println!("option {key}: {:?}", command.options()[key]);
    }
}
