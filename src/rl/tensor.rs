//! Conversion of observations into Burn tensors

use burn::tensor::{backend::Backend, Tensor, TensorData};

use super::observation::{Observation, OBSERVATION_SIZE};

/// Create a `[1, 4]` tensor holding the observation
pub fn observation_tensor<B: Backend>(observation: &Observation, device: &B::Device) -> Tensor<B, 2> {
    let data: Vec<f32> = observation.values().iter().map(|&v| v as f32).collect();
    let tensor_data = TensorData::new(data, [1, OBSERVATION_SIZE]);

    Tensor::<B, 2>::from_data(tensor_data, device)
}
