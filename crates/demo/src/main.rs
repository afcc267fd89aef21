// File: crates/demo/src/main.rs
// Summary: Demo loads an hourly forecast CSV and renders the four sparkline
// modes (tiny, annotated, area, table) to SVGs.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use spark_core::{
    hour_label, peak_index, DisplayBox, HourlyPoint, HourlyTable, RenderVariant, SparkOptions,
    Sparkline, TableOptions,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hourly_forecast.csv".to_string());
    let tide_variant: RenderVariant = std::env::args()
        .nth(2)
        .as_deref()
        .unwrap_or("area")
        .parse()?;

    let forecast = match resolve_path(&raw) {
        Some(path) => {
            println!("Using input file: {}", path.display());
            load_forecast_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file found ('{raw}'); using built-in sample forecast.");
            sample_forecast()
        }
    };
    println!("Loaded {} hourly samples", forecast.len());

    if forecast.len() < 2 {
        anyhow::bail!("not enough samples to chart; check headers/delimiter.");
    }

    let now = forecast.len() / 2;
    let wind: Vec<f64> = forecast.iter().map(|h| h.wind_kts).collect();
    let tide: Vec<f64> = forecast.iter().map(|h| h.tide_m).collect();

    // 1) Tiny inline wind sparkline with a now dot
    let spark_wind = Sparkline::new(wind.clone());
    let opts_tiny = SparkOptions {
        now_index: Some(now),
        highlight_peak: true,
        ..Default::default()
    };
    let out = out_name("wind_tiny");
    spark_wind.render_to_svg(&opts_tiny, &out)?;
    println!("Wrote {}", out.display());

    // 2) Annotated wind chart with trend and peak-time text
    let peak = peak_index(&wind).unwrap_or(0);
    let opts_annotated = SparkOptions {
        display: DisplayBox::annotated(),
        now_index: Some(now),
        show_min_max: true,
        trend_text: Some(trend_text(&wind).to_string()),
        peak_time: Some(format!("peak near {}", forecast[peak].label)),
        decimals: 0,
        ..Default::default()
    };
    let out = out_name("wind_annotated");
    spark_wind.render_annotated_to_svg(&opts_annotated, &out)?;
    println!("Wrote {}", out.display());

    // 3) Tide chart, area by default (line via second CLI arg)
    let opts_tide = SparkOptions {
        variant: tide_variant,
        color: "#2aa198".to_string(),
        now_index: Some(now),
        show_now_marker: true,
        ..Default::default()
    };
    let out = out_name("tide");
    Sparkline::new(tide).render_to_svg(&opts_tide, &out)?;
    println!("Wrote {}", out.display());

    // 4) Hourly wind table windowed around now
    let points = forecast
        .iter()
        .map(|h| {
            let p = HourlyPoint::new(h.label.clone(), h.wind_kts);
            match &h.direction {
                Some(d) => p.with_direction(d.clone()),
                None => p,
            }
        })
        .collect();
    let table = HourlyTable::new(points, "kt").with_now_index(now);
    let out = out_name("wind_table");
    table.render_to_svg(&TableOptions::default(), &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

struct ForecastHour {
    label: String,
    wind_kts: f64,
    tide_m: f64,
    direction: Option<String>,
}

/// Describe the overall wind trend by comparing the ends of the series.
fn trend_text(values: &[f64]) -> &'static str {
    let first = values.first().copied().unwrap_or(0.0);
    let last = values.last().copied().unwrap_or(0.0);
    if last > first + 1.0 {
        "building"
    } else if last < first - 1.0 {
        "easing"
    } else {
        "steady"
    }
}

/// Try the given path, then the bundled asset next to this crate.
fn resolve_path(raw: &str) -> Option<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Some(p.to_path_buf());
    }
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(raw);
    if bundled.exists() {
        return Some(bundled);
    }
    None
}

/// Produce an output file name like target/out/spark_<suffix>.svg
fn out_name(suffix: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("spark_{}.svg", suffix))
}

/// Load an hourly forecast CSV with time/wind/tide/direction columns.
fn load_forecast_csv(path: &Path) -> Result<Vec<ForecastHour>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_time = idx(&["time", "hour", "label"]);
    let i_wind = idx(&["wind_kts", "wind", "wind_speed"]);
    let i_tide = idx(&["tide_m", "tide", "tide_height"]);
    let i_dir = idx(&["direction", "dir", "wind_dir"]);

    if i_time.is_none() || i_wind.is_none() {
        println!("Warning: Could not find time/wind columns.");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let get = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(|s| s.trim());
        let parse = |i: Option<usize>| get(i).and_then(|s| s.parse::<f64>().ok());

        let label = get(i_time)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{row}h"));
        let Some(wind_kts) = parse(i_wind) else { continue };
        let tide_m = parse(i_tide).unwrap_or(0.0);
        let direction = get(i_dir).filter(|s| !s.is_empty()).map(|s| s.to_string());
        out.push(ForecastHour { label, wind_kts, tide_m, direction });
    }
    Ok(out)
}

/// Built-in 12-hour sample starting at 6am, used when no CSV is present.
fn sample_forecast() -> Vec<ForecastHour> {
    let winds = [6.0, 7.5, 9.0, 11.0, 13.5, 15.0, 14.0, 12.5, 11.0, 9.5, 8.0, 7.0];
    let tides = [0.4, 0.9, 1.5, 2.0, 2.3, 2.2, 1.8, 1.2, 0.7, 0.4, 0.5, 0.9];
    let dirs = ["N", "N", "NNW", "NW", "NW", "W", "W", "WSW", "SW", "SW", "S", "S"];
    (0..12)
        .map(|i| {
            let t = NaiveTime::from_hms_opt(6 + i as u32, 0, 0).unwrap_or_default();
            ForecastHour {
                label: hour_label(t),
                wind_kts: winds[i],
                tide_m: tides[i],
                direction: Some(dirs[i].to_string()),
            }
        })
        .collect()
}
