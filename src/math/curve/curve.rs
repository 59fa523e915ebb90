/// 可在任意實數點求值的一元曲線。
///
/// `Polynomial`、`LagrangePolynomial`、`NewtonPolynomial` 都實作此 trait，
/// 讓積分器可以不區分來源直接取值。
pub trait Curve {
    fn value(&self, x: f64) -> f64;
}
