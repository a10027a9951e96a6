// Command-line interface for docsync
//
// This binary converts document trees, as exchanged with the remote content service, to and from
// editable markdown. It is a thin shell over docsync-babel: it reads files, picks formats, applies
// configuration and writes output. All conversion logic lives in the library.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  docsync <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  docsync convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above
//  docsync split <input> [--part <part>]                                      - Print one part of the file
//  docsync --list-formats                                                     - List formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  docsync issue.json --to json --extra-pretty false

use clap::{Arg, ArgAction, Command, ValueHint};
use docsync_babel::common::{envelope, frontmatter};
use docsync_babel::FormatRegistry;
use docsync_config::{DocsyncConfig, FrontmatterMode, Loader};
use std::collections::HashMap;
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "split", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("docsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert document trees to and from editable markdown")
        .long_about(
            "docsync converts rich documents between the JSON tree form used by the remote\n\
            content service and a markdown form meant for editing.\n\n\
            Content markdown cannot express is kept in PRESERVED comment blocks and restored\n\
            exactly when converting back.\n\n\
            Examples:\n  \
            docsync issue.json --to markdown -o issue.md   # Pull: tree to markdown\n  \
            docsync issue.md --to json                     # Push: markdown to tree\n  \
            docsync split issue.md --part metadata         # Print the frontmatter block",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available conversion formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docsync.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between formats.\n\n\
                    Supported formats:\n  \
                    - json:     Document tree (.json)\n  \
                    - markdown: Markdown with preservation markers (.md)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    A leading --- metadata block in markdown input is handled according to\n\
                    convert.markdown.frontmatter (auto, required or ignore). When converting\n\
                    markdown to markdown the block is written back unchanged.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Write JSON on a single line")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Split a markdown file into its frontmatter block and body sections")
                .long_about(
                    "Print one part of a pulled markdown file.\n\n\
                    Parts:\n  \
                    - metadata:    the frontmatter block\n  \
                    - body:        everything after the frontmatter (default)\n  \
                    - title:       the leading # heading\n  \
                    - description: the body without title, description heading and comments\n  \
                    - comments:    the ### author - date sections",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("part")
                        .long("part")
                        .help("Which part to print")
                        .value_parser(["metadata", "body", "title", "description", "comments"])
                        .default_value("body"),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let compact = matches
        .subcommand_matches("convert")
        .is_some_and(|sub| sub.get_flag("compact"));
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()), compact);
    init_logging(&config);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                exit_with("input is required");
            };
            let Some(to) = sub_matches.get_one::<String>("to") else {
                exit_with("--to is required");
            };

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => FormatRegistry::default()
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }),
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("split", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                exit_with("input is required");
            };
            let part = sub_matches
                .get_one::<String>("part")
                .map(|s| s.as_str())
                .unwrap_or("body");
            handle_split_command(input, part);
        }
        _ => exit_with("Unknown subcommand. Use --help for usage information."),
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &DocsyncConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            exit_with(&format!("Error: {e}"));
        }
    }

    let source = read_input(input);

    let (metadata, body) = if from == "markdown" {
        strip_frontmatter(&source, config.convert.markdown.frontmatter)
    } else {
        (None, source)
    };

    let doc = registry.parse(&body, from).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let mut format_options = config.convert.options_for(to);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let mut result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match metadata {
        Some(metadata) if to == "markdown" => result = frontmatter::join(&metadata, &result),
        Some(_) => log::debug!("dropping frontmatter block of '{input}'"),
        None => {}
    }

    match output {
        Some(path) => fs::write(path, result).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{result}"),
    }
}

/// Separates the frontmatter block from markdown input according to `mode`.
fn strip_frontmatter(source: &str, mode: FrontmatterMode) -> (Option<String>, String) {
    let required = match mode {
        FrontmatterMode::Ignore => return (None, source.to_string()),
        FrontmatterMode::Auto if !frontmatter::has_frontmatter(source) => {
            return (None, source.to_string())
        }
        FrontmatterMode::Auto => false,
        FrontmatterMode::Required => true,
    };

    match frontmatter::split(source) {
        Ok(parts) => (Some(parts.metadata), parts.body),
        Err(e) if required => exit_with(&format!("Error: {e}")),
        Err(e) => {
            log::warn!("{e}; reading the whole input as body");
            (None, source.to_string())
        }
    }
}

/// Handle the split command
fn handle_split_command(input: &str, part: &str) {
    let source = read_input(input);
    let parts = frontmatter::split(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match part {
        "metadata" => println!("{}", parts.metadata),
        "body" => print!("{}", parts.body),
        _ => print!("{}", envelope_part(&envelope::split(&parts.body), part)),
    }
}

/// Renders one envelope part of a body for the split command.
fn envelope_part(body: &envelope::Envelope, part: &str) -> String {
    match part {
        "title" => body
            .title
            .as_ref()
            .map(|title| format!("{title}\n"))
            .unwrap_or_default(),
        "comments" => body
            .comments
            .iter()
            .map(|comment| {
                format!(
                    "### {} - {}\n\n{}\n\n",
                    comment.author, comment.date, comment.body
                )
            })
            .collect(),
        _ if body.description.is_empty() => String::new(),
        _ => format!("{}\n", body.description),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<10} {description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>, compact: bool) -> DocsyncConfig {
    let loader = Loader::new().with_optional_file("docsync.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if compact {
        loader
            .set_override("convert.json.pretty", false)
            .unwrap_or_else(|err| exit_with(&format!("Failed to load configuration: {err}")))
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Starts env_logger at the configured level; RUST_LOG wins when set.
fn init_logging(config: &DocsyncConfig) {
    let env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn exit_with(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
