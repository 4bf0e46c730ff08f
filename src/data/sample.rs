/// One labelled training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, expected: Vec<f64>) -> Sample {
        Sample { input, expected }
    }
}
