// Evaluates a tiny hand-trained network in memory: two inputs, one hidden
// unit, one output. Run with:
//   cargo run --example predict

use forward_nn::{ForwardNetwork, Matrix, Parameters, Topology};

fn main() -> forward_nn::Result<()> {
    let topology = Topology::new(2, 1, 1)?;
    let mut network = ForwardNetwork::new(topology);
    network.bind_parameters(Parameters {
        hidden_weights: Matrix::from_rows(vec![vec![1.0, 1.0]])?,
        hidden_bias: vec![0.0],
        output_weights: Matrix::from_rows(vec![vec![1.0]])?,
        output_bias: vec![0.0],
        input_min: vec![0.0, 0.0],
        input_max: vec![1.0, 1.0],
    })?;

    for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let prediction = network.predict(&input)?;
        println!("{input:?} -> {prediction:?}");
    }
    Ok(())
}
