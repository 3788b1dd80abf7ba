use crate::state::DashboardState;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const HEADING_STYLE: &str = "background-color: #51E9BF; color: #05509A; text-align: left";
const HALF_WIDTH: &str = "width: 50%; display: inline-block";

// ---------------------------------------------------------------------------
// Page layout
// ---------------------------------------------------------------------------

/// Render the full dashboard page.
///
/// The graph panels are empty `div`s; `dashboard.js` fills them from
/// `/api/figures` and redraws a panel when its dropdown changes.
pub fn render_page(state: &DashboardState) -> String {
    let mut body = String::new();

    heading(&mut body, "1- Stations avec le plus de trafic");
    dropdown(
        &mut body,
        "reseau-filter",
        "reseau",
        "bar-chart",
        "Séléctionner un réseau",
        &state.network_options,
    );
    body.push_str("    <div class=\"row\">\n");
    graph(&mut body, "bar-chart", Some(HALF_WIDTH));
    graph(&mut body, "pie-chart", Some(HALF_WIDTH));
    body.push_str("    </div>\n");

    heading(&mut body, "2- Nombre de station par lignes et par exploitants");
    dropdown(
        &mut body,
        "exploit-filter",
        "exploitant",
        "bar-chart2",
        "Séléctionner un exploitant",
        &state.operator_options,
    );
    graph(&mut body, "bar-chart2", None);
    graph(&mut body, "bar-chart3", None);

    heading(&mut body, "4- Map interactive");
    graph(&mut body, "map-graph", None);

    format!(
        r#"<!doctype html>
<html lang="fr">
  <head>
    <meta charset="utf-8" />
    <title>Trafic et gares d'Île-de-France</title>
    <link rel="stylesheet" href="/assets/dashboard.css" />
    <script src="{PLOTLY_JS}"></script>
  </head>
  <body>
{body}    <script src="/assets/dashboard.js"></script>
  </body>
</html>
"#
    )
}

fn heading(out: &mut String, text: &str) {
    out.push_str(&format!(
        "    <h1 style=\"{HEADING_STYLE}\">{}</h1>\n",
        escape_html(text)
    ));
}

/// A `<select>` whose first, empty option means "no filter".
/// `data-param` names the query parameter and `data-target` the graph it redraws.
fn dropdown(
    out: &mut String,
    id: &str,
    param: &str,
    target: &str,
    placeholder: &str,
    options: &[String],
) {
    out.push_str(&format!(
        "    <select id=\"{id}\" class=\"filter\" data-param=\"{param}\" data-target=\"{target}\">\n"
    ));
    out.push_str(&format!(
        "      <option value=\"\">{}</option>\n",
        escape_html(placeholder)
    ));
    for opt in options {
        let opt = escape_html(opt);
        out.push_str(&format!("      <option value=\"{opt}\">{opt}</option>\n"));
    }
    out.push_str("    </select>\n");
}

fn graph(out: &mut String, id: &str, style: Option<&str>) {
    let style = style.map(|s| format!(" style=\"{s}\"")).unwrap_or_default();
    out.push_str(&format!("    <div id=\"{id}\" class=\"graph\"{style}></div>\n"));
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
