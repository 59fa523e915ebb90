use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::approximation::approximationjob::ApproximationJob;
use crate::math::linalg::gaussianelimination::SolverOptions;
use crate::math::quadrature::quadraturejob::QuadratureJob;
use crate::math::rootfinding::rootfinder::RootFindingOptions;
use crate::math::tolerance::Tolerances;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    tolerances: Tolerances,
    #[serde(default)]
    quadrature: Vec<serde_json::Value>,
    #[serde(default)]
    approximation: Vec<serde_json::Value>,
}

/// 設定檔內容：
///
/// ```json
/// {
///   "tolerances": { "singularity_threshold": 1e-12 },
///   "quadrature": [
///     { "name": "xcos3", "integrand": { "function": "XCosCubed" },
///       "a": 3.5, "b": 6.5, "rule": "GaussLegendre", "nodes": 3, "panels": 10 }
///   ],
///   "approximation": [
///     { "name": "sin2", "function": "Sin", "a": 0.0, "b": 1.5707963267948966,
///       "degree": 2, "subdivisions": 800 }
///   ]
/// }
/// ```
#[derive(Default)]
pub struct Configuration {
    tolerances: Tolerances,
    quadrature_manager: Manager<QuadratureJob>,
    approximation_manager: Manager<ApproximationJob>,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions::from(&self.tolerances)
    }

    pub fn root_finding_options(&self) -> RootFindingOptions {
        RootFindingOptions::from(&self.tolerances)
    }

    pub fn quadrature_manager(&self) -> &Manager<QuadratureJob> {
        &self.quadrature_manager
    }

    pub fn approximation_manager(&self) -> &Manager<ApproximationJob> {
        &self.approximation_manager
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        Configuration::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ManagerError> {
        Configuration::from_json_reader(json.as_bytes())
    }

    fn from_json_reader<R: Read>(reader: R) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        json_prop.tolerances.validate()?;

        let mut configuration = Configuration {
            tolerances: json_prop.tolerances,
            ..Configuration::default()
        };
        configuration
            .quadrature_manager
            .insert_obj_from_json_vec(json_prop.quadrature)?;
        configuration
            .approximation_manager
            .insert_obj_from_json_vec(json_prop.approximation)?;
        Ok(configuration)
    }
}
