//! Subcommand implementations
//!
//! Both commands are generic over the client and renderer so tests can drive
//! them with a scripted client and a temporary directory.

use crate::config::OutputConfig;
use crate::output::{artifact_paths, write_artifact};
use anyhow::Context;
use roadmap_core::{RoadmapError, RoadmapExtractor, RoadmapGraph, TextGenerationClient};
use roadmap_render::{GraphRenderer, RenderStyle};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Hint appended when the same request may succeed on a later run
pub const RETRY_HINT: &str = "The request may succeed if tried again later.";

/// Files produced by `generate`
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The validated graph
    pub graph: RoadmapGraph,
    /// Pretty-printed JSON artifact
    pub json_path: PathBuf,
    /// HTML artifact, unless disabled
    pub html_path: Option<PathBuf>,
}

/// Build a roadmap for `topic` and write its artifacts
///
/// Nothing is written unless the extractor returns a valid graph.
pub async fn generate<C, R>(
    extractor: &RoadmapExtractor<C>,
    renderer: &R,
    topic: &str,
    style: &RenderStyle,
    output: &OutputConfig,
) -> anyhow::Result<GenerateOutcome>
where
    C: TextGenerationClient,
    R: GraphRenderer,
{
    // Fail on a bad style before spending any model calls
    style.validate()?;

    let graph = extractor.build_roadmap(topic).await?;
    let (json_path, html_path) = artifact_paths(&output.dir, topic);

    let json = graph.to_pretty_json().context("serializing roadmap")?;
    write_artifact(&json_path, &json)?;

    let html_path = if output.html {
        let html = renderer.render(&graph, style)?;
        write_artifact(&html_path, &html)?;
        Some(html_path)
    } else {
        None
    };

    Ok(GenerateOutcome {
        graph,
        json_path,
        html_path,
    })
}

/// Re-render a previously written JSON artifact
///
/// The file goes through the same structural validation as model output.
/// Without `output`, the HTML is written next to the input.
pub fn render_file<R: GraphRenderer>(
    renderer: &R,
    input: &Path,
    output: Option<&Path>,
    style: &RenderStyle,
) -> anyhow::Result<PathBuf> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let graph = RoadmapGraph::from_json_str(&text)
        .with_context(|| format!("loading graph from {}", input.display()))?;

    let html = renderer.render(&graph, style)?;
    let target = output.map_or_else(
        || input.with_extension(renderer.extension()),
        Path::to_path_buf,
    );
    write_artifact(&target, &html)?;
    Ok(target)
}

/// Error chain for stderr, plus the last model output when extraction gave up
#[must_use]
pub fn failure_report(err: &anyhow::Error) -> String {
    let mut report = format!("error: {err:#}\n");

    if let Some(cause) = err.downcast_ref::<RoadmapError>() {
        if let RoadmapError::ExtractionFailed {
            attempts,
            last_attempt,
        } = cause
        {
            let _ = write!(
                report,
                "\nLast output after {attempts} attempt(s):\n{}\n",
                last_attempt.cleaned
            );
        }
        if cause.is_retryable() {
            report.push_str(RETRY_HINT);
            report.push('\n');
        }
    }
    report
}
