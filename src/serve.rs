//! The HTTP layer.
//!
//! One route does the work: `GET /` composes the page for the run the
//! cursor currently points at and moves the cursor along. Chart images are
//! served by a static file layer nested at `/runs`, rooted at the run root,
//! so `<img>` URLs resolve no matter what directory the process was started
//! from.
//!
//! Filesystem errors are caught at this boundary and turned into diagnostic
//! 500 pages; the server keeps running. An empty run root gets a friendly
//! 404 page rather than an indexing error.

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use maud::Markup;
use tower_http::services::ServeDir;

use crate::cursor::Cursor;
use crate::render;
use crate::scan::{self, ScanError};

#[derive(Clone)]
struct AppState {
    root: PathBuf,
    cursor: Arc<Cursor>,
}

/// Builds the application router: the rotating run page at `/` and the
/// chart file service under `/runs`.
pub fn router(root: PathBuf) -> Router {
    let state = AppState {
        root: root.clone(),
        cursor: Arc::new(Cursor::new()),
    };
    Router::new()
        .route("/", get(show_next_run))
        .nest_service("/runs", ServeDir::new(root))
        .with_state(state)
}

/// Binds the listener and serves until the process is stopped.
///
/// Bind failures (port in use, permission denied) are returned for `main`
/// to report; nothing is printed until the listener is actually up.
pub async fn serve(root: PathBuf, port: u16) -> io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Listening at http://{}", listener.local_addr()?);
    println!("Displaying charts in: {}", root.display());
    axum::serve(listener, router(root)).await
}

async fn show_next_run(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let (status, body) = next_run_page(&state.root, &state.cursor);
    (status, Html(body))
}

/// One full request: snapshot the run list, pick the current run, read its
/// charts and config, compose the page.
///
/// The cursor advances exactly once per request, even when reading the run
/// fails — a broken run yields a diagnostic page and the rotation moves on,
/// so the remaining runs stay reachable.
pub fn next_run_page(root: &Path, cursor: &Cursor) -> (StatusCode, String) {
    let dirs = match scan::list_run_dirs(root) {
        Ok(dirs) => dirs,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                render::error_page(&err.to_string()).into_string(),
            );
        }
    };

    let Some(index) = cursor.select_and_advance(dirs.len()) else {
        return (
            StatusCode::NOT_FOUND,
            render::empty_page(root).into_string(),
        );
    };

    match compose_run(root, &dirs[index]) {
        Ok(page) => (StatusCode::OK, page.into_string()),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            render::error_page(&err.to_string()).into_string(),
        ),
    }
}

fn compose_run(root: &Path, dir: &Path) -> Result<Markup, ScanError> {
    let charts = scan::list_charts(dir)?;
    let config_text = scan::read_run_config(dir)?;

    let title = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let srcs: Vec<String> = charts.iter().map(|c| chart_url(root, c)).collect();

    Ok(render::run_page(&title, &srcs, &config_text))
}

/// URL for a chart under the `/runs` static service: the chart's path
/// relative to the run root, with `/` separators on every platform.
fn chart_url(root: &Path, chart: &Path) -> String {
    let rel = chart.strip_prefix(root).unwrap_or(chart);
    let mut url = String::from("/runs");
    for part in rel.components() {
        url.push('/');
        url.push_str(&part.as_os_str().to_string_lossy());
    }
    url
}
