use backprop_nn::data::xor_samples;
use backprop_nn::{Network, Sgd};
use rand::seq::SliceRandom;

fn main() {
    let mut network = Network::new(&[2, 2, 1], "tanh").expect("valid topology");
    let samples = xor_samples();
    let optimizer = Sgd::new(0.1);
    let mut rng = rand::thread_rng();

    for step in 0..20_000 {
        let sample = samples.choose(&mut rng).expect("non-empty sample set");
        optimizer
            .step(&mut network, &sample.input, &sample.expected)
            .expect("sample matches the network widths");

        if step % 2_000 == 0 {
            let stats = network.statistics(&samples).expect("widths match");
            println!("Step {step}: avg error = {:.6}", stats.avg_error[0]);
        }
    }

    // Roughly one random start in five ends in a local minimum; rerun if so.
    for sample in &samples {
        let output = network.apply(&sample.input).expect("widths match");
        println!("Input: {:?} -> Output: {:.4}", sample.input, output[0]);
    }
}
