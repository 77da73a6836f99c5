use crate::{Backend, InferError, ModelSource, Session};
use handpose_base::Tensor;
use log::{debug, info};
use ndarray::ArrayD;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::collections::HashMap;

/// ONNX Runtime backend, CPU execution provider only.
#[derive(Debug, Default)]
pub struct OnnxBackend;

impl OnnxBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        let mut builder = OrtSession::builder().map_err(|e| {
            InferError::BackendError(format!("failed to create session builder: {}", e))
        })?;

        let session = match model {
            ModelSource::File(path) => {
                info!("loading ONNX model from {}", path.display());
                builder.commit_from_file(&path).map_err(|e| {
                    InferError::ModelLoad(format!(
                        "failed to load model from {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            ModelSource::Memory(bytes) => {
                info!("loading ONNX model from memory ({} bytes)", bytes.len());
                builder.commit_from_memory(&bytes).map_err(|e| {
                    InferError::ModelLoad(format!("failed to load model from memory: {}", e))
                })?
            }
        };

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();
        debug!("model inputs: {:?}, outputs: {:?}", input_names, output_names);

        Ok(Box::new(OnnxSession {
            session,
            input_names,
            output_names,
        }))
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        for (name, _) in inputs {
            if !self.input_names.iter().any(|n| n == name) {
                return Err(InferError::InvalidInput {
                    name: name.to_string(),
                    expected_names: self.input_names.clone(),
                });
            }
        }

        // The hand network takes a single image blob.
        let [(name, tensor)] = inputs else {
            return Err(InferError::BackendError(format!(
                "expected exactly 1 input, got {}",
                inputs.len()
            )));
        };

        let array = tensor_to_ndarray(tensor.clone())?;
        let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
            InferError::BackendError(format!("failed to create tensor ref: {}", e))
        })?;
        let outputs = self
            .session
            .run(inputs![*name => tensor_ref])
            .map_err(|e| InferError::BackendError(format!("inference failed: {}", e)))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let value = &outputs[output_name.as_str()];
            let array = value.try_extract_array::<f32>().map_err(|e| {
                InferError::UnsupportedDtype(format!("output '{}' is not f32: {}", output_name, e))
            })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

pub fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data).map_err(|e| {
        InferError::BackendError(format!("failed to create ndarray from tensor: {}", e))
    })
}

pub fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    // iter() walks in logical (row-major) order regardless of memory layout
    let data = array.iter().copied().collect();
    Ok(Tensor::new(shape, data)?)
}
