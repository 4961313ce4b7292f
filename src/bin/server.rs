use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use base64::Engine as _;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use grayscott::config::Params;
use grayscott::{render, simulate};

#[derive(Deserialize)]
struct SimulateRequest {
    ticks: Option<usize>,
    rows: Option<usize>,
    cols: Option<usize>,
    square_size: Option<usize>,
    // Reaction-diffusion rates
    diff_a: Option<f64>,
    diff_b: Option<f64>,
    feed: Option<f64>,
    kill: Option<f64>,
}

#[derive(Serialize)]
struct SimulateResponse {
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
    rows: usize,
    cols: usize,
    ticks: usize,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_png(rgba: &[u8], rows: usize, cols: usize) -> String {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(rgba, cols as u32, rows as u32, image::ExtendedColorType::Rgba8)
        .expect("PNG encode failed");
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    format!("data:image/png;base64,{}", b64)
}

async fn simulate_handler(
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, (StatusCode, String)> {
    let ticks = req.ticks.unwrap_or(1000).min(50_000);
    let rows = req.rows.unwrap_or(200).min(2048);
    let cols = req.cols.unwrap_or(200).min(2048);
    let square_size = req.square_size.unwrap_or(5);

    let defaults = Params::default();
    let params = Params {
        diff_a: req.diff_a.unwrap_or(defaults.diff_a),
        diff_b: req.diff_b.unwrap_or(defaults.diff_b),
        feed: req.feed.unwrap_or(defaults.feed),
        kill: req.kill.unwrap_or(defaults.kill),
    };

    let result = tokio::task::spawn_blocking(move || {
        let (engine, timings) = simulate(rows, cols, square_size, ticks, params)?;

        let layers = vec![
            Layer {
                name: "gray".into(),
                data_url: encode_png(&render::render_gray(&engine), rows, cols),
            },
            Layer {
                name: "chemical_b".into(),
                data_url: encode_png(&render::render_chemical_b(&engine), rows, cols),
            },
        ];

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        Ok::<_, grayscott::error::EngineError>(SimulateResponse {
            layers,
            timings: timing_entries,
            rows,
            cols,
            ticks,
        })
    })
    .await;

    match result {
        Ok(Ok(response)) => Ok(Json(response)),
        Ok(Err(e)) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        // Blocking task panicked or was cancelled
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

#[tokio::main]
async fn main() {
    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/simulate", post(simulate_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("grayscott server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
