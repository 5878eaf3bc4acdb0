use argvise::derive::OptionStore;
use argvise::{Command, Error, Help, Kind, Layout, OptionConfig};
use assert_matches::assert_matches;
use std::collections::HashMap;

fn expect(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    pairs
        .iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|value| value.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn schemaless_basic() {
    let mut command = Command::from_args([
        "path/to/app",
        "--foo-bar=A",
        "-a",
        "--baz",
        "-bc=3",
        "qux",
        "-c=4",
        "quux",
    ]);
    command.parse().unwrap();

    assert_eq!(command.name(), "app");
    assert_eq!(command.positional_arguments(), ["qux", "quux"]);
    assert_eq!(
        command.options(),
        &expect(&[
            ("a", &[]),
            ("b", &[]),
            ("c", &["3", "4"]),
            ("foo-bar", &["A"]),
            ("baz", &[]),
        ])
    );
}

#[test]
fn schema_with_defaults_and_array() {
    let mut command = Command::from_args([
        "app", "--foo-bar", "qux", "--baz", "1", "-z=2", "-X", "quux",
    ]);
    command
        .parse_with(vec![
            OptionConfig::new(["foo-bar"]),
            OptionConfig::new(["baz", "z"])
                .store_key("Bazoo")
                .takes_argument()
                .array(),
            OptionConfig::new(["corge"]).takes_argument().defaults(["99"]),
            OptionConfig::wildcard(),
        ])
        .unwrap();

    assert_eq!(command.name(), "app");
    assert_eq!(command.positional_arguments(), ["qux", "quux"]);
    assert_eq!(
        command.options(),
        &expect(&[
            ("foo-bar", &[]),
            ("Bazoo", &["1", "2"]),
            ("X", &[]),
            ("corge", &["99"]),
        ])
    );
}

#[test]
fn end_of_options_sentinel() {
    let mut command = Command::from_args(["app", "-s", "--", "-s", "--", "-s@", "xxx"]);
    command.parse().unwrap();

    assert_eq!(command.positional_arguments(), ["-s", "--", "-s@", "xxx"]);
    assert_eq!(command.options(), &expect(&[("s", &[])]));
}

#[test]
fn sub_command_split() {
    let mut command = Command::from_args([
        "path/to/app",
        "--foo-bar=A",
        "-a",
        "--baz",
        "-bc=3",
        "qux",
        "-c=4",
        "quux",
    ]);
    let mut sub_command = command.parse_until_sub_command().unwrap();

    assert_eq!(command.name(), "app");
    assert!(command.positional_arguments().is_empty());
    assert_eq!(
        command.options(),
        &expect(&[
            ("a", &[]),
            ("b", &[]),
            ("c", &["3"]),
            ("foo-bar", &["A"]),
            ("baz", &[]),
        ])
    );
    assert_eq!(sub_command.input(), ["-c=4", "quux"]);

    sub_command.parse().unwrap();
    assert_eq!(sub_command.name(), "qux");
    assert_eq!(sub_command.positional_arguments(), ["quux"]);
    assert_eq!(sub_command.options(), &expect(&[("c", &["4"])]));
}

#[test]
fn invalid_character_continues_parsing() {
    let mut command = Command::from_args(["app", "--foo", "--1", "-b2ar", "--3", "baz"]);
    let error = command.parse().unwrap_err();

    assert_matches!(error, Error::OptionHasInvalidCharacter { name } if name == "1");
    assert_eq!(command.positional_arguments(), ["baz"]);
    assert_eq!(
        command.options(),
        &expect(&[("foo", &[]), ("b", &[]), ("a", &[]), ("r", &[])])
    );
}

#[test]
fn help_alignment() {
    let configs = vec![
        OptionConfig::new(["foo-bar", "f"])
            .takes_argument()
            .help_label("<text>")
            .description("D1"),
        OptionConfig::new(["baz", "b"]).description("D2"),
    ];
    let help = Help::new(1000).add_options(&configs, Layout::new());

    assert_eq!(
        help.lines().collect::<Vec<_>>(),
        vec!["--foo-bar, -f <text>  D1", "--baz, -b             D2"]
    );
}

#[derive(Debug, Default, OptionStore)]
struct Options {
    #[argvise(tag = "verbose,v", help = "Louder.")]
    verbose: bool,
    #[argvise(tag = "jobs,j=1", help = "Parallelism.", label = "<n>")]
    jobs: u8,
    #[argvise(tag = "include,I")]
    include: Vec<String>,
    #[argvise(tag = "tags=[a,b]")]
    tags: Vec<String>,
    scale_factor: f64,
    r#type: String,
}

#[test]
fn derived_store() {
    let mut options = Options::default();
    let mut command = Command::new(
        "app",
        [
            "-v",
            "--include=src",
            "-I",
            "lib",
            "--scale-factor",
            "0.5",
            "--type",
            "x",
            "main.rs",
        ],
    );
    command.parse_store(&mut options).unwrap();

    assert!(options.verbose);
    assert_eq!(options.jobs, 1);
    assert_eq!(options.include, vec!["src".to_string(), "lib".to_string()]);
    assert_eq!(options.tags, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(options.scale_factor, 0.5);
    assert_eq!(options.r#type, "x");
    assert_eq!(command.positional_arguments(), ["main.rs"]);
    assert_eq!(command.option_arguments("include").unwrap(), ["src", "lib"]);
    assert_eq!(command.option_argument("jobs"), "1");
}

#[test]
fn derived_store_untouched() {
    let mut options = Options {
        scale_factor: 2.0,
        ..Options::default()
    };
    let mut command = Command::new("app", Vec::<String>::default());
    command.parse_store(&mut options).unwrap();

    assert!(!options.verbose);
    assert_eq!(options.scale_factor, 2.0);
    assert!(options.include.is_empty());
    assert_eq!(options.r#type, "");
}

#[test]
fn derived_store_conversion_error() {
    let mut options = Options::default();
    let mut command = Command::new("app", ["--jobs", "many"]);
    let error = command.parse_store(&mut options).unwrap_err();

    assert!(std::error::Error::source(&error).is_some());
    assert_matches!(
        error,
        Error::OptionArgumentIsInvalid { store_key, argument, kind: Kind::Uint, .. }
            if store_key == "jobs" && argument == "many"
    );
}

#[test]
fn derived_store_unknown_option() {
    let mut options = Options::default();
    let mut command = Command::new("app", ["--moot"]);
    let error = command.parse_store(&mut options).unwrap_err();

    assert_matches!(error, Error::UnconfiguredOption { name } if name == "moot");
}

#[derive(Default, OptionStore)]
struct Unsupported {
    maybe: Option<u8>,
}

#[test]
fn derived_store_bad_field_type() {
    let mut unsupported = Unsupported::default();
    let mut command = Command::new("app", ["--maybe", "1"]);
    let error = command.parse_store(&mut unsupported).unwrap_err();

    assert_matches!(error, Error::BadFieldType { field, .. } if field == "maybe");
    assert!(command.options().is_empty());
    assert_eq!(unsupported.maybe, None);
}

#[derive(Default, OptionStore)]
struct Parent {
    #[argvise(tag = "verbose,v")]
    verbose: bool,
}

#[derive(Default, OptionStore)]
struct Build {
    #[argvise(tag = "release,r")]
    release: bool,
    #[argvise(tag = "target,t")]
    target: String,
}

#[test]
fn derived_sub_command() {
    let mut parent = Parent::default();
    let mut command = Command::from_args(["path/to/tool", "-v", "build", "-r", "--target=arm", "src"]);
    let mut sub_command = command.parse_store_until_sub_command(&mut parent).unwrap();

    assert!(parent.verbose);
    assert_eq!(sub_command.name(), "build");

    let mut build = Build::default();
    sub_command.parse_store(&mut build).unwrap();

    assert!(build.release);
    assert_eq!(build.target, "arm");
    assert_eq!(sub_command.positional_arguments(), ["src"]);
}

#[test]
fn derived_help() {
    let mut options = Options::default();
    let mut command = Command::new("app", Vec::<String>::default());
    command.parse_store(&mut options).unwrap();

    let configs = command.configs().unwrap();
    let help = Help::new(80).add_options(&configs[..2], Layout::new());

    assert_eq!(
        help.lines().collect::<Vec<_>>(),
        vec!["--verbose, -v   Louder.", "--jobs, -j <n>  Parallelism."]
    );
}

#[derive(Default, OptionStore)]
struct Counted {
    #[argvise(tag = "=5")]
    count: u32,
}

#[test]
fn derived_store_key_only() {
    let mut counted = Counted::default();
    let mut command = Command::new("app", ["--count", "7", "x"]);
    command.parse_store(&mut counted).unwrap();

    assert_eq!(counted.count, 7);
    assert_eq!(command.option_argument("count"), "7");
    assert_eq!(command.positional_arguments(), ["x"]);
}

#[test]
fn derived_store_key_only_default() {
    let mut counted = Counted::default();
    let mut command = Command::new("app", Vec::<String>::default());
    command.parse_store(&mut counted).unwrap();

    assert_eq!(counted.count, 5);
}

#[test]
fn schema_store_key_only() {
    let configs = vec![
        OptionConfig::new(["", ""])
            .store_key("corge")
            .takes_argument()
            .description("C"),
        OptionConfig::new([""]).description("Notes."),
    ];
    let help = Help::new(80).add_options(&configs[..1], Layout::new());
    assert_eq!(help.lines().collect::<Vec<_>>(), vec!["      --corge  C"]);

    let mut command = Command::new("app", ["--corge", "x", "y"]);
    command.parse_with(configs).unwrap();

    assert_eq!(command.options(), &expect(&[("corge", &["x"])]));
    assert_eq!(command.positional_arguments(), ["y"]);
}
