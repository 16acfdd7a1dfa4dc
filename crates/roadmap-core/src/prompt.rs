//! Prompt templates for the two generation steps

/// Header placed before the free-text roadmap in the coercion prompt
pub const ROADMAP_DATA_HEADER: &str = "Roadmap Data:";

/// Prompt asking for a free-text roadmap of `topic`
#[must_use]
pub fn freeform_prompt(topic: &str) -> String {
    format!(
        "Create a detailed roadmap of {topic}, including subjects, algorithms, steps, and types."
    )
}

/// Prompt asking to re-express `freeform` as a strict nodes/edges JSON object
#[must_use]
pub fn graph_prompt(freeform: &str) -> String {
    format!(
        "Convert this roadmap into a valid JSON object with exactly two top-level members:\n\
         - 'nodes': a list of objects with 'id' and 'label'.\n\
         - 'edges': a list of objects with 'source', 'target', and 'relation'.\n\
         Every edge 'source' and 'target' must be the 'id' of a listed node, and node ids must be unique.\n\
         Return only the JSON. Do not include any explanations, prose, or markdown.\n\n\
         {ROADMAP_DATA_HEADER}\n{freeform}"
    )
}
