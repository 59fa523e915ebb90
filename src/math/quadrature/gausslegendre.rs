use crate::math::numericalerror::NumericalError;

// ─────────────────────────────────────────────
// 複合 Gauss-Legendre
// ─────────────────────────────────────────────
//
// [a, b] 等分為 panels 段，每段以 [-1, 1] 上的固定節點規則積分：
//
//   ∫_{a_j}^{b_j} f(x) dx ≈ (h/2) · Σ w_i · f(mid_j + (h/2)·ξ_i)
//
// k 節點規則對 2k-1 次以下多項式精確。

const NODES_2: [f64; 2] = [-0.5773502691896257, 0.5773502691896257];
const WEIGHTS_2: [f64; 2] = [1.0, 1.0];

const NODES_3: [f64; 3] = [-0.7745966692414834, 0.0, 0.7745966692414834];
const WEIGHTS_3: [f64; 3] = [5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0];

const NODES_4: [f64; 4] = [
    -0.8611363115940526,
    -0.3399810435848563,
    0.3399810435848563,
    0.8611363115940526,
];
const WEIGHTS_4: [f64; 4] = [
    0.3478548451374538,
    0.6521451548625461,
    0.6521451548625461,
    0.3478548451374538,
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GaussLegendreNodes {
    Two,
    Three,
    Four,
}

impl GaussLegendreNodes {
    pub fn count(&self) -> usize {
        match self {
            GaussLegendreNodes::Two => 2,
            GaussLegendreNodes::Three => 3,
            GaussLegendreNodes::Four => 4,
        }
    }

    /// [-1, 1] 上的 (節點, 權重)
    pub fn abscissas_and_weights(&self) -> (&'static [f64], &'static [f64]) {
        match self {
            GaussLegendreNodes::Two => (&NODES_2, &WEIGHTS_2),
            GaussLegendreNodes::Three => (&NODES_3, &WEIGHTS_3),
            GaussLegendreNodes::Four => (&NODES_4, &WEIGHTS_4),
        }
    }
}

impl TryFrom<usize> for GaussLegendreNodes {
    type Error = NumericalError;

    fn try_from(count: usize) -> Result<GaussLegendreNodes, NumericalError> {
        match count {
            2 => Ok(GaussLegendreNodes::Two),
            3 => Ok(GaussLegendreNodes::Three),
            4 => Ok(GaussLegendreNodes::Four),
            _ => Err(NumericalError::invalid_argument(format!(
                "gauss-legendre: node count must be 2, 3 or 4 (got {count})"
            ))),
        }
    }
}

pub fn gauss_legendre<F>(
    f: F,
    a: f64,
    b: f64,
    nodes: usize,
    panels: usize,
) -> Result<f64, NumericalError>
where
    F: Fn(f64) -> f64,
{
    let rule = GaussLegendreNodes::try_from(nodes)?;
    if panels == 0 {
        return Err(NumericalError::invalid_argument(
            "gauss-legendre: panel count must be positive",
        ));
    }

    let (abscissas, weights) = rule.abscissas_and_weights();
    let h = (b - a) / panels as f64;
    let half = 0.5 * h;

    let mut sum = 0.0;
    for j in 0..panels {
        let mid = a + (j as f64 + 0.5) * h;
        for (&xi, &w) in abscissas.iter().zip(weights) {
            sum += w * f(mid + half * xi);
        }
    }
    Ok(sum * half)
}
