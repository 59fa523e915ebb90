use serde::{
    Deserialize,
    Serialize
};

use crate::math::numericalerror::NumericalError;
use crate::math::tolerance::{
    DEFAULT_GAUSS_NODES,
    DEFAULT_GAUSS_PANELS,
    DEFAULT_SUBDIVISIONS
};

use super::integrate::integrate;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "rule")]
pub enum QuadratureRule {
    Midpoint { subdivisions: usize },
    Trapezoid { subdivisions: usize },
    /// 奇數 subdivisions 會自動進位成偶數
    Simpson { subdivisions: usize },
    /// nodes 僅接受 2、3、4
    GaussLegendre { nodes: usize, panels: usize },
}

impl QuadratureRule {
    pub fn midpoint() -> QuadratureRule {
        QuadratureRule::Midpoint { subdivisions: DEFAULT_SUBDIVISIONS }
    }

    pub fn trapezoid() -> QuadratureRule {
        QuadratureRule::Trapezoid { subdivisions: DEFAULT_SUBDIVISIONS }
    }

    pub fn simpson() -> QuadratureRule {
        QuadratureRule::Simpson { subdivisions: DEFAULT_SUBDIVISIONS }
    }

    pub fn gauss_legendre() -> QuadratureRule {
        QuadratureRule::GaussLegendre {
            nodes: DEFAULT_GAUSS_NODES,
            panels: DEFAULT_GAUSS_PANELS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureRule::Midpoint { .. } => "midpoint",
            QuadratureRule::Trapezoid { .. } => "trapezoid",
            QuadratureRule::Simpson { .. } => "simpson",
            QuadratureRule::GaussLegendre { .. } => "gauss-legendre",
        }
    }
}

/// 一次積分所需的完整設定：規則加上區間。
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct QuadratureConfig {
    pub a: f64,
    pub b: f64,
    #[serde(flatten)]
    pub rule: QuadratureRule,
}

impl QuadratureConfig {
    pub fn new(a: f64, b: f64, rule: QuadratureRule) -> QuadratureConfig {
        QuadratureConfig { a, b, rule }
    }

    pub fn integrate<F>(&self, f: F) -> Result<f64, NumericalError>
    where
        F: Fn(f64) -> f64,
    {
        integrate(f, self.a, self.b, self.rule)
    }
}
