// Thin driver around the library: load a network description, bind its
// parameters from the referenced data files, and evaluate one input vector.
// All numeric logic lives in the library (src/lib.rs and its modules).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use forward_nn::io::table;
use forward_nn::{ForwardNetwork, LogTrace, Matrix, NetworkConfig, Parameters, Topology};

#[derive(Parser)]
#[command(
    name = "forward-nn",
    about = "Evaluate a trained feedforward network on an input vector"
)]
struct Args {
    /// Network description JSON (topology, data files, ranges).
    #[arg(short, long)]
    config: PathBuf,

    /// Input features; comma-separated or as separate arguments.
    #[arg(required = true, value_delimiter = ',')]
    input: Vec<f64>,

    /// Log intermediate sums and activations (requires RUST_LOG=debug).
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = NetworkConfig::load_json(&args.config)
        .with_context(|| format!("reading network config {}", args.config.display()))?;
    if config.normalized_range.is_degenerate() {
        bail!("normalized_range must have distinct low and high");
    }

    let base = args.config.parent().unwrap_or(Path::new("."));
    let network = build_network(&config, base)?;
    let prediction = if args.trace {
        network.predict_traced(&args.input, &mut LogTrace)?
    } else {
        network.predict(&args.input)?
    };

    let rendered: Vec<String> = prediction.iter().map(|y| y.to_string()).collect();
    println!("{}", rendered.join("\t"));
    Ok(())
}

/// Loads the six data files named by `config` (resolved against `base`) and
/// returns a network with the parameters bound.
fn build_network(config: &NetworkConfig, base: &Path) -> Result<ForwardNetwork> {
    let topology = Topology::new(config.inputs, config.hidden, config.outputs)?;

    let matrix = |path: &Path, rows: usize, cols: usize| -> Result<Matrix> {
        table::load_matrix(base.join(path), rows, cols)
            .with_context(|| format!("loading {}", path.display()))
    };
    let vector = |path: &Path, len: usize| -> Result<Vec<f64>> {
        table::load_vector(base.join(path), len)
            .with_context(|| format!("loading {}", path.display()))
    };

    let files = &config.files;
    let params = Parameters {
        hidden_weights: matrix(&files.hidden_weights, config.hidden, config.inputs)?,
        hidden_bias: vector(&files.hidden_bias, config.hidden)?,
        output_weights: matrix(&files.output_weights, config.outputs, config.hidden)?,
        output_bias: vector(&files.output_bias, config.outputs)?,
        input_min: vector(&files.input_min, config.inputs)?,
        input_max: vector(&files.input_max, config.inputs)?,
    };

    let mut network = ForwardNetwork::new(topology)
        .with_normalized_range(config.normalized_range)
        .with_output_range(config.output_range);
    network.bind_parameters(params)?;
    Ok(network)
}
