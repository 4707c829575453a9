use clap::{Parser, Subcommand};
use plotly::{
	common::{ColorScale, ColorScalePalette, Marker, MarkerSymbol, Mode, Title},
	contour::Contour,
	Layout, Plot, Scatter,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use benchmark_function::{
	batch_from_json, evaluate_grid, optimal_solution, BenchmarkFunction, FunctionMetadata,
};

/// CLI arguments for the benchmark function catalog
#[derive(Parser)]
#[command(name = "benchfn")]
#[command(about = "Evaluate, list and plot the benchmark functions")]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// List the functions with their search area and optimum
	List {
		/// Print metadata as JSON
		#[arg(long)]
		json: bool,
	},

	/// Print the optimal solution of every function
	Optimum {
		/// Dimension of the solutions
		#[arg(short, long, default_value = "2")]
		dimension: usize,
	},

	/// Evaluate a batch given as a JSON array of rows, e.g. '[[0,0],[1,1]]'
	Eval {
		/// Function name (Sphere, kTablet, rosenbrock_chain, ...)
		#[arg(short, long)]
		function: BenchmarkFunction,

		/// Batch as inline JSON
		#[arg(short, long, conflicts_with = "file")]
		input: Option<String>,

		/// Read the batch from a JSON file
		#[arg(long)]
		file: Option<PathBuf>,

		/// Evaluate rows in parallel
		#[arg(long)]
		parallel: bool,
	},

	/// Contour plots over the search area, one HTML file per function
	Plot {
		/// Function to plot, or "all"
		#[arg(short, long, default_value = "all")]
		function: String,

		/// Height of the plot in pixels
		#[arg(short = 'H', long, default_value = "800")]
		height: usize,

		/// Width of the plot in pixels
		#[arg(short = 'W', long, default_value = "800")]
		width: usize,

		/// Number of points along x-axis
		#[arg(short = 'x', long, default_value = "100")]
		xn: usize,

		/// Number of points along y-axis
		#[arg(short = 'y', long, default_value = "100")]
		yn: usize,

		/// Output directory for HTML files
		#[arg(short, long, default_value = ".")]
		output_dir: PathBuf,
	},
}

fn main() {
	env_logger::init();
	let args = Args::parse();

	if let Err(e) = run(args.command) {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
	match command {
		Command::List { json } => list(json),
		Command::Optimum { dimension } => {
			let table: BTreeMap<String, Vec<f64>> = optimal_solution(dimension).into_iter().collect();
			println!("{}", serde_json::to_string_pretty(&table)?);
			Ok(())
		}
		Command::Eval { function, input, file, parallel } => {
			let text = match (input, file) {
				(Some(text), _) => text,
				(None, Some(path)) => fs::read_to_string(path)?,
				(None, None) => return Err("either --input or --file is required".into()),
			};
			let value: Value = serde_json::from_str(&text)?;
			let batch = batch_from_json(&value)?;
			if batch.ncols() < function.min_dimension() {
				log::warn!(
					"{} expects at least {} dimension(s), got {}",
					function,
					function.min_dimension(),
					batch.ncols()
				);
			}
			let fitness = if parallel {
				function.par_evaluate(&batch)?
			} else {
				function.evaluate(&batch)?
			};
			println!("{}", serde_json::to_string(&fitness.to_vec())?);
			Ok(())
		}
		Command::Plot { function, height, width, xn, yn, output_dir } => {
			let functions = if function.eq_ignore_ascii_case("all") {
				BenchmarkFunction::ALL.to_vec()
			} else {
				vec![function.parse::<BenchmarkFunction>()?]
			};
			fs::create_dir_all(&output_dir)?;
			for f in functions {
				plot_function(f, xn, yn, width, height, &output_dir)?;
			}
			println!("Plots saved to directory: {}", output_dir.display());
			Ok(())
		}
	}
}

fn list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
	let metadata: Vec<FunctionMetadata> =
		BenchmarkFunction::ALL.iter().map(|&f| FunctionMetadata::from(f)).collect();

	if json {
		println!("{}", serde_json::to_string_pretty(&metadata)?);
		return Ok(());
	}

	println!(
		"{:<16} {:>20} {:>8} {:>7} {:>10}  description",
		"name", "search area", "optimum", "min dim", "modality"
	);
	for meta in &metadata {
		println!(
			"{:<16} {:>20} {:>8} {:>7} {:>10}  {}",
			meta.name,
			format!("[{}, {}]", meta.bounds.0, meta.bounds.1),
			format!("({},..)", meta.optimum),
			meta.min_dimension,
			if meta.multimodal { "multi" } else { "uni" },
			meta.description
		);
	}
	Ok(())
}

fn plot_function(
	function: BenchmarkFunction,
	xn: usize,
	yn: usize,
	width: usize,
	height: usize,
	output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
	let [lower, upper] = function.search_area();
	let grid = evaluate_grid(function, (lower, upper), (lower, upper), xn, yn)?;

	let contour = Contour::new(grid.x, grid.y, grid.z)
		.color_scale(ColorScale::Palette(ColorScalePalette::Viridis));

	let optimum = function.optimal_solution(2);
	let optimum_trace = Scatter::new(vec![optimum[0]], vec![optimum[1]])
		.mode(Mode::Markers)
		.name("Global Minimum")
		.marker(
			Marker::new()
				.color("rgba(255, 255, 255, 1.0)")
				.size(10)
				.symbol(MarkerSymbol::Diamond),
		);

	let layout = Layout::new()
		.title(Title::with_text(&format!("Function: {}", function)))
		.width(width)
		.height(height)
		.x_axis(plotly::layout::Axis::new().title(Title::with_text("x1")))
		.y_axis(plotly::layout::Axis::new().title(Title::with_text("x2")));

	let mut plot = Plot::new();
	plot.add_trace(contour);
	plot.add_trace(optimum_trace);
	plot.set_layout(layout);

	let filename = output_dir.join(format!("{}.html", function.name()));
	plot.write_html(&filename);
	log::info!("wrote {}", filename.display());
	Ok(())
}
