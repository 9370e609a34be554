// classifier.rs
//
// The congestion model: a single-layer LSTM with a dense softmax head,
// evaluated directly from the exported weight matrices. Gate order in the
// concatenated kernels follows the Keras export convention: input, forget,
// cell, output.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PredictError;
use crate::shared_data::CongestionDistribution;

/// Trained congestion classifier loaded from a JSON weight artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct CongestionClassifier {
    /// LSTM hidden size.
    pub units: usize,
    /// Input kernel: 4 rows (one per feature) of `4 * units` columns.
    pub kernel: Vec<Vec<f64>>,
    /// Recurrent kernel: `units` rows of `4 * units` columns.
    pub recurrent_kernel: Vec<Vec<f64>>,
    /// Concatenated gate biases, length `4 * units`.
    pub bias: Vec<f64>,
    /// Dense head: `units` rows of 3 columns (one per congestion class).
    pub dense_kernel: Vec<Vec<f64>>,
    /// Dense head bias, one per congestion class.
    pub dense_bias: [f64; 3],
}

impl CongestionClassifier {
    /// Loads and shape-checks the model artifact from disk.
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            PredictError::ModelUnavailable(format!(
                "cannot read model artifact {}: {}",
                path.display(),
                e
            ))
        })?;
        let model: CongestionClassifier = serde_json::from_str(&raw).map_err(|e| {
            PredictError::ModelUnavailable(format!(
                "cannot parse model artifact {}: {}",
                path.display(),
                e
            ))
        })?;
        model.check_shapes().map_err(|reason| {
            PredictError::ModelUnavailable(format!(
                "model artifact {} is malformed: {}",
                path.display(),
                reason
            ))
        })?;
        Ok(model)
    }

    fn check_shapes(&self) -> Result<(), String> {
        let gates = 4 * self.units;
        if self.units == 0 {
            return Err("units must be positive".into());
        }
        if self.kernel.len() != 4 || self.kernel.iter().any(|row| row.len() != gates) {
            return Err(format!("kernel must be 4 x {}", gates));
        }
        if self.recurrent_kernel.len() != self.units
            || self.recurrent_kernel.iter().any(|row| row.len() != gates)
        {
            return Err(format!("recurrent kernel must be {} x {}", self.units, gates));
        }
        if self.bias.len() != gates {
            return Err(format!("bias must have length {}", gates));
        }
        if self.dense_kernel.len() != self.units
            || self.dense_kernel.iter().any(|row| row.len() != 3)
        {
            return Err(format!("dense kernel must be {} x 3", self.units));
        }
        Ok(())
    }

    /// Runs the LSTM over a feature sequence from zero state and returns the
    /// softmaxed class distribution of the final step. Road predictions pass
    /// a single-timestep sequence.
    pub fn classify(&self, sequence: &[[f64; 4]]) -> CongestionDistribution {
        let n = self.units;
        let mut hidden = vec![0.0; n];
        let mut cell = vec![0.0; n];

        for features in sequence {
            // Pre-activation for all four gates at once.
            let mut gates = self.bias.clone();
            for (f, &x) in features.iter().enumerate() {
                for (j, g) in gates.iter_mut().enumerate() {
                    *g += x * self.kernel[f][j];
                }
            }
            for (u, &h) in hidden.iter().enumerate() {
                for (j, g) in gates.iter_mut().enumerate() {
                    *g += h * self.recurrent_kernel[u][j];
                }
            }

            for u in 0..n {
                let input_gate = sigmoid(gates[u]);
                let forget_gate = sigmoid(gates[n + u]);
                let candidate = gates[2 * n + u].tanh();
                let output_gate = sigmoid(gates[3 * n + u]);
                cell[u] = forget_gate * cell[u] + input_gate * candidate;
                hidden[u] = output_gate * cell[u].tanh();
            }
        }

        let mut logits = self.dense_bias;
        for (u, &h) in hidden.iter().enumerate() {
            for k in 0..3 {
                logits[k] += h * self.dense_kernel[u][k];
            }
        }
        softmax(logits)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softmax(logits: [f64; 3]) -> [f64; 3] {
    // Shift by the max logit so the exponentials stay bounded.
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut out = [0.0; 3];
    let mut sum = 0.0;
    for k in 0..3 {
        out[k] = (logits[k] - max).exp();
        sum += out[k];
    }
    for v in &mut out {
        *v /= sum;
    }
    out
}
