use std::path::PathBuf;

use grayscott::config::Params;
use grayscott::{render, simulate};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let ticks: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2000);
    let rows: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200);
    let cols: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(200);
    let square: usize = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(5);
    let out_dir: PathBuf = args
        .get(5)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    std::fs::create_dir_all(&out_dir).expect("failed to create output directory");

    let params = Params::default();

    eprintln!(
        "Running {}x{} Gray-Scott for {} ticks (seed square {}, f={}, k={})",
        rows, cols, ticks, square, params.feed, params.kill
    );

    let (engine, timings) =
        simulate(rows, cols, square, ticks, params).expect("failed to build simulation");

    // Print timings
    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    // Save snapshot PNGs
    let save = |name: &str, rgba: &[u8]| {
        let path = out_dir.join(name);
        image::save_buffer(&path, rgba, cols as u32, rows as u32, image::ColorType::Rgba8)
            .expect("failed to save image");
        eprintln!("Saved {}", path.display());
    };

    save("gray.png", &render::render_gray(&engine));
    save("chemical_b.png", &render::render_chemical_b(&engine));

    eprintln!("\nDone.");
}
