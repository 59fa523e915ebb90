use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::targetfunction::TargetFunction;
use crate::math::numericalerror::NumericalError;
use crate::math::polynomial::polynomial::evaluate_polynomial;

use super::quadraturerule::{
    QuadratureConfig,
    QuadratureRule
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrand {
    Function(TargetFunction),
    /// 係數由低次到高次
    Polynomial(Vec<f64>),
}

/// 設定檔中的一筆積分工作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadratureJob {
    pub integrand: Integrand,
    pub a: f64,
    pub b: f64,
    #[serde(flatten)]
    pub rule: QuadratureRule,
}

impl QuadratureJob {
    pub fn config(&self) -> QuadratureConfig {
        QuadratureConfig::new(self.a, self.b, self.rule)
    }

    pub fn run(&self) -> Result<f64, NumericalError> {
        let config = self.config();
        match &self.integrand {
            Integrand::Function(function) => config.integrate(|x| function.evaluate(x)),
            Integrand::Polynomial(coefs) => config.integrate(|x| evaluate_polynomial(coefs, x)),
        }
    }
}
