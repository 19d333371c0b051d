//! Standalone HTML export of a graph for the browser-side 3D renderer.

use crate::error::ApiError;
use crate::tree::graph::GraphExport;

const FORCE_GRAPH_SCRIPT: &str = "https://unpkg.com/3d-force-graph";

/// Render a self-contained page that loads the force-graph script and feeds
/// it the embedded graph document.
pub fn render_standalone_html(title: &str, graph: &GraphExport) -> Result<String, ApiError> {
    let payload = escape_script_json(&serde_json::to_string(graph)?);
    let title = escape_text(title);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title} 3D</title>
<script src="{script}"></script>
<style>body {{ margin: 0; background: #050505; }}</style>
</head>
<body>
<div id="graph"></div>
<script>
  const gData = {payload};
  ForceGraph3D()(document.getElementById('graph'))
    .graphData(gData)
    .dagMode('td')
    .dagLevelDistance(60)
    .nodeAutoColorBy('group')
    .linkDirectionalParticles(2)
    .nodeLabel(node => node.desc ? `${{node.id}} (${{node.desc}})` : node.id);
</script>
</body>
</html>
"#,
        title = title,
        script = FORCE_GRAPH_SCRIPT,
        payload = payload,
    ))
}

/// Escape markup characters in serialized JSON so no path can end the script
/// element or open an HTML comment inside it. The `\uXXXX` forms parse back
/// to the same strings.
fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
