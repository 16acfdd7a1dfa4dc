//! `roadmap` command-line entry point

use anyhow::Context;
use clap::ArgMatches;
use roadmap_cli::cli::{apply_generate_overrides, apply_style_overrides, cli};
use roadmap_cli::{commands, logging, AppConfig};
use roadmap_core::{RoadmapError, RoadmapExtractor};
use roadmap_gemini::GeminiClient;
use roadmap_render::HtmlRenderer;
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    logging::init(matches.get_flag("log-json"));

    match run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", commands::failure_report(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut config = AppConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

    match matches.subcommand() {
        Some(("generate", args)) => {
            apply_generate_overrides(args, &mut config);
            let topic = args
                .get_one::<String>("topic")
                .context("missing topic")?;

            let client = GeminiClient::from_env(config.gemini.clone())
                .map_err(RoadmapError::from)?;
            let extractor = RoadmapExtractor::new(client).with_policy(config.retry.policy());
            let renderer = HtmlRenderer::new().with_title(topic.trim());

            let outcome =
                commands::generate(&extractor, &renderer, topic, &config.style, &config.output)
                    .await?;

            println!(
                "Roadmap for '{}': {} nodes, {} edges",
                topic.trim(),
                outcome.graph.node_count(),
                outcome.graph.edge_count()
            );
            println!("  JSON: {}", outcome.json_path.display());
            if let Some(html) = &outcome.html_path {
                println!("  HTML: {}", html.display());
            }
            Ok(())
        }
        Some(("render", args)) => {
            let input = args
                .get_one::<PathBuf>("input")
                .context("missing input")?;
            let style = apply_style_overrides(args, config.style);
            let title = args.get_one::<String>("title").cloned().unwrap_or_else(|| {
                input
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("Roadmap")
                    .to_string()
            });
            let renderer = HtmlRenderer::new().with_title(title);

            let written = commands::render_file(
                &renderer,
                input,
                args.get_one::<PathBuf>("output").map(PathBuf::as_path),
                &style,
            )?;
            println!("  HTML: {}", written.display());
            Ok(())
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand {other}"),
        None => anyhow::bail!("no subcommand given"),
    }
}
