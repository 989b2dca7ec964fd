//! Headless Atmospheric Chart Renderer
//!
//! Renders the temperature-vs-altitude chart as ASCII or exports the full
//! dataset and selection details as JSON. Useful for piping into other
//! tools and for eyeballing the core geometry without a TUI.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-headless -- --unit fahrenheit --select 10
//! cargo run --package demo-headless -- --format json | jq .layers
//! ```

use atmo_chart_core::{
    layer_for_altitude, layer_summaries, scale, Celsius, PointDetails, TemperatureUnit, ViewState,
    LAYERS, PLACEHOLDER_PROMPT, TEMPERATURE_PROFILE,
};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Render the atmospheric temperature chart to text or JSON")]
struct Args {
    /// Temperature display unit
    #[arg(long, value_enum, default_value_t = UnitArg::Celsius)]
    unit: UnitArg,

    /// Select the data point at this profile index (0-14)
    #[arg(long)]
    select: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// ASCII chart width in columns
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// ASCII chart height in rows
    #[arg(long, default_value_t = 24)]
    height: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitArg> for TemperatureUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Celsius => TemperatureUnit::Celsius,
            UnitArg::Fahrenheit => TemperatureUnit::Fahrenheit,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(index) = args.select {
        if index >= TEMPERATURE_PROFILE.len() {
            eprintln!(
                "error: --select {index} out of range (0-{})",
                TEMPERATURE_PROFILE.len() - 1
            );
            std::process::exit(2);
        }
    }

    let mut view = ViewState {
        unit: args.unit.into(),
        selected: None,
    };
    if let Some(index) = args.select {
        let announcement = view.select(index);
        info!(index, "{}", announcement.text);
    }

    match args.format {
        FormatArg::Text => print_text(&view, args.width.max(20), args.height.max(8)),
        FormatArg::Json => print_json(&view),
    }
}

fn print_text(view: &ViewState, width: usize, height: usize) {
    println!("Atmospheric Temperature Profile ({})", view.unit.symbol());
    println!();
    print_ascii_chart(view, width, height);
    println!();
    print_layer_table(view);
    println!();
    match view.selected_details() {
        Some(details) => print_details(&details),
        None => println!("{PLACEHOLDER_PROMPT}"),
    }
}

/// Plot the profile curve on a character grid, altitude up, temperature
/// right, with the layer name annotated at each band's midpoint row.
fn print_ascii_chart(view: &ViewState, width: usize, height: usize) {
    let [dmin, dmax] = scale::temperature_domain(view.unit);
    let max_alt = scale::MAX_ALTITUDE_KM;

    let col_of = |temperature: Celsius| {
        let value = view.unit.numeric(temperature);
        let t = (value - dmin) / (dmax - dmin);
        ((t * (width - 1) as f64).round() as usize).min(width - 1)
    };
    let row_of = |altitude_km: f64| {
        let t = 1.0 - altitude_km / max_alt;
        ((t * (height - 1) as f64).round() as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; width]; height];

    // Curve: one interpolated point per row keeps the polyline connected
    // even where samples are sparse.
    for row in 0..height {
        let altitude = (1.0 - row as f64 / (height - 1) as f64) * max_alt;
        let col = col_of(temperature_at(altitude));
        grid[row][col] = '*';
    }

    // Sample markers on top of the curve, selection highlighted.
    for (index, point) in TEMPERATURE_PROFILE.iter().enumerate() {
        let row = row_of(point.altitude_km);
        let col = col_of(point.temperature);
        grid[row][col] = if view.selected == Some(index) { 'X' } else { 'o' };
    }

    // Rows at which to annotate each layer's name.
    let layer_rows: Vec<(usize, &str)> = LAYERS
        .iter()
        .map(|layer| {
            let mid = (layer.altitude_low_km + layer.altitude_high_km) / 2.0;
            (row_of(mid), layer.name)
        })
        .collect();

    for (row, cells) in grid.iter().enumerate() {
        let altitude = (1.0 - row as f64 / (height - 1) as f64) * max_alt;
        let line: String = cells.iter().collect();
        let annotation = layer_rows
            .iter()
            .find(|(r, _)| *r == row)
            .map_or("", |(_, name)| *name);
        println!("{altitude:>5.0} km |{line}| {annotation}");
    }

    // Temperature axis with the display-unit tick values.
    let mut axis = vec![' '; width];
    let mut labels = String::new();
    for value in scale::grid_temperatures(view.unit) {
        let t = (value - dmin) / (dmax - dmin);
        let col = ((t * (width - 1) as f64).round() as usize).min(width - 1);
        axis[col] = '+';
        labels.push_str(&format!("  {value}{}", view.unit.symbol()));
    }
    let axis_line: String = axis.iter().collect();
    println!("{:>8} +{axis_line}+", "");
    println!("{:>8}  {labels}", "");
}

/// Linear interpolation of the profile at an arbitrary altitude.
fn temperature_at(altitude_km: f64) -> Celsius {
    let first = &TEMPERATURE_PROFILE[0];
    if altitude_km <= first.altitude_km {
        return first.temperature;
    }
    for pair in TEMPERATURE_PROFILE.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if altitude_km <= b.altitude_km {
            let span = b.altitude_km - a.altitude_km;
            let t = (altitude_km - a.altitude_km) / span;
            return Celsius::new(*a.temperature + t * (*b.temperature - *a.temperature));
        }
    }
    TEMPERATURE_PROFILE[TEMPERATURE_PROFILE.len() - 1].temperature
}

fn print_layer_table(view: &ViewState) {
    let selected_layer = view
        .selected
        .map(|index| layer_for_altitude(TEMPERATURE_PROFILE[index].altitude_km).name);

    println!(
        "{:<2}{:<14}{:<11}{:<22}{}",
        "", "Layer", "Altitude", "Temp Range", "Characteristics"
    );
    for summary in layer_summaries() {
        let mark = if selected_layer == Some(summary.layer.name) { ">" } else { "" };
        let range = format!(
            "{} to {}",
            view.unit.format(summary.min_temperature),
            view.unit.format(summary.max_temperature)
        );
        println!(
            "{mark:<2}{:<14}{:<11}{range:<22}{}",
            summary.layer.name,
            summary.layer.range_text(),
            summary.layer.characteristics
        );
    }
}

fn print_details(details: &PointDetails) {
    println!("{}", details.layer_name);
    println!("  Altitude:        {}", details.altitude_text);
    println!("  Temperature:     {}", details.temperature_text);
    println!("  Layer Range:     {}", details.layer_range_text);
    println!("  Characteristics: {}", details.characteristics);
}

#[derive(Serialize)]
struct Report {
    unit: &'static str,
    selected: Option<PointDetails>,
    layers: Vec<LayerReport>,
    profile: Vec<SampleReport>,
}

#[derive(Serialize)]
struct LayerReport {
    name: &'static str,
    altitude_range: String,
    min_temperature: String,
    max_temperature: String,
    characteristics: &'static str,
}

#[derive(Serialize)]
struct SampleReport {
    altitude_km: f64,
    temperature: String,
    layer: &'static str,
}

fn print_json(view: &ViewState) {
    let report = Report {
        unit: view.unit.symbol(),
        selected: view.selected_details(),
        layers: layer_summaries()
            .into_iter()
            .map(|summary| LayerReport {
                name: summary.layer.name,
                altitude_range: summary.layer.range_text(),
                min_temperature: view.unit.format(summary.min_temperature),
                max_temperature: view.unit.format(summary.max_temperature),
                characteristics: summary.layer.characteristics,
            })
            .collect(),
        profile: TEMPERATURE_PROFILE
            .iter()
            .map(|point| SampleReport {
                altitude_km: point.altitude_km,
                temperature: view.unit.format(point.temperature),
                layer: layer_for_altitude(point.altitude_km).name,
            })
            .collect(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize report: {err}");
            std::process::exit(1);
        }
    }
}
