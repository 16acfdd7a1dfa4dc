//! Command-line definition and flag overrides

use crate::config::AppConfig;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use roadmap_render::{Layout, RenderError, RenderStyle};
use std::path::PathBuf;

fn parse_layout(s: &str) -> Result<Layout, RenderError> {
    s.parse()
}

/// Style flags shared by `generate` and `render`
fn style_args() -> [Arg; 5] {
    [
        Arg::new("node-color")
            .long("node-color")
            .value_name("COLOR")
            .help("Node fill color"),
        Arg::new("edge-color")
            .long("edge-color")
            .value_name("COLOR")
            .help("Edge line color"),
        Arg::new("node-size")
            .long("node-size")
            .value_parser(value_parser!(u32).range(1..))
            .help("Node radius in pixels"),
        Arg::new("font-size")
            .long("font-size")
            .value_parser(value_parser!(u32).range(1..))
            .help("Label font size in pixels"),
        Arg::new("layout")
            .long("layout")
            .value_parser(parse_layout)
            .help(format!(
                "Layout solver: {}",
                Layout::ALL.map(Layout::as_str).join(" or ")
            )),
    ]
}

/// Build the `roadmap` command
#[must_use]
pub fn cli() -> Command {
    Command::new("roadmap")
        .version(roadmap_core::VERSION)
        .about("Turn a topic into a validated roadmap graph")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: ./roadmap.toml if present)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a roadmap for a topic and write JSON and HTML artifacts")
                .arg(
                    Arg::new("topic")
                        .required(true)
                        .value_name("TOPIC")
                        .help("Subject of the roadmap"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory for generated artifacts"),
                )
                .arg(
                    Arg::new("no-html")
                        .long("no-html")
                        .action(ArgAction::SetTrue)
                        .help("Write only the JSON artifact"),
                )
                .arg(
                    Arg::new("model")
                        .long("model")
                        .help("Gemini model name"),
                )
                .arg(
                    Arg::new("max-attempts")
                        .long("max-attempts")
                        .value_parser(value_parser!(u32).range(1..))
                        .help("JSON coercion attempts before giving up"),
                )
                .args(style_args()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a saved roadmap JSON file to HTML")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .value_name("JSON")
                        .value_parser(value_parser!(PathBuf))
                        .help("Roadmap JSON file"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("HTML output path (default: input with .html extension)"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Document title (default: input file stem)"),
                )
                .args(style_args()),
        )
}

/// Apply style flags from a `generate` or `render` match
#[must_use]
pub fn apply_style_overrides(args: &ArgMatches, mut style: RenderStyle) -> RenderStyle {
    if let Some(color) = args.get_one::<String>("node-color") {
        style = style.with_node_color(color.clone());
    }
    if let Some(color) = args.get_one::<String>("edge-color") {
        style = style.with_edge_color(color.clone());
    }
    if let Some(size) = args.get_one::<u32>("node-size") {
        style = style.with_node_size(*size);
    }
    if let Some(size) = args.get_one::<u32>("font-size") {
        style = style.with_font_size(*size);
    }
    if let Some(layout) = args.get_one::<Layout>("layout") {
        style = style.with_layout(*layout);
    }
    style
}

/// Apply `generate` flags on top of file configuration
pub fn apply_generate_overrides(args: &ArgMatches, config: &mut AppConfig) {
    if let Some(dir) = args.get_one::<PathBuf>("out-dir") {
        config.output.dir.clone_from(dir);
    }
    if args.get_flag("no-html") {
        config.output.html = false;
    }
    if let Some(model) = args.get_one::<String>("model") {
        config.gemini.model.clone_from(model);
    }
    if let Some(attempts) = args.get_one::<u32>("max-attempts") {
        config.retry.max_attempts = *attempts;
    }
    config.style = apply_style_overrides(args, std::mem::take(&mut config.style));
}
