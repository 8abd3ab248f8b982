use axum::extract::State;
use axum::response::Html;
use tracing::debug;

use crate::state::AppState;

/// Served when the front-end file is missing from disk.
const FALLBACK_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Counterfactual Scenario Service</title>
</head>
<body>
    <h1>The server is running.</h1>
    <p>The front-end page was not found on disk.</p>
    <p>Set INDEX_HTML to the path of the interface page, or POST to /api/generate directly.</p>
</body>
</html>
"#;

/// GET /
/// Serves the static front-end verbatim; substitutes a minimal fallback page
/// when the file is absent.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    match tokio::fs::read_to_string(&state.config.index_html_path).await {
        Ok(contents) => Html(contents),
        Err(e) => {
            debug!(
                "index file '{}' not readable ({e}); serving fallback page",
                state.config.index_html_path
            );
            Html(FALLBACK_PAGE.to_string())
        }
    }
}
