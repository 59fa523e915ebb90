use std::env;
use std::f64::consts::FRAC_PI_2;

use numlab::configuration::Configuration;
use numlab::manager::managererror::ManagerError;
use numlab::math::approximation::leastsquares::{
    approximate,
    rms_error
};
use numlab::math::interpolation::lagrangepolynomial::lagrange;
use numlab::math::interpolation::newtonpolynomial::{
    newton_coefficients,
    newton_evaluate
};
use numlab::math::linalg::gaussianelimination::solve_linear_system_verbose;
use numlab::math::ode::odesolver::integrate_ode;
use numlab::math::ode::odestep::StepMethod;
use numlab::math::polynomial::polynomial::evaluate_polynomial;
use numlab::math::quadrature::integrate::{
    integrate,
    integrate_polynomial
};
use numlab::math::quadrature::quadraturerule::QuadratureRule;
use numlab::math::rootfinding::rootfinder::{
    IterationRecord,
    RootFindingOptions,
    RootMethod,
    find_root
};

fn main() -> Result<(), ManagerError> {
    match env::args().nth(1) {
        Some(config_path) => run_configuration(&Configuration::from_reader(config_path)?),
        None => run_demos(),
    }
}

fn run_configuration(config: &Configuration) -> Result<(), ManagerError> {
    for (name, job) in config.quadrature_manager().iter() {
        println!("{name} ({}) = {:.10}", job.rule.name(), job.run()?);
    }

    let solver_options = config.solver_options();
    for (name, job) in config.approximation_manager().iter() {
        let coefs = job.run(&solver_options)?;
        let rms = rms_error(|x| job.function.evaluate(x), &coefs, job.a, job.b, 100);
        println!("{name}: {coefs:?} (rms {rms:.3e})");
    }
    Ok(())
}

fn run_demos() -> Result<(), ManagerError> {
    // least squares: sin(x) on [0, π/2]
    let f = |x: f64| x.sin();
    let coefs = approximate(f, 0.0, FRAC_PI_2, 2, 800)?;
    println!("degree 2 least squares fit of sin(x) on [0, pi/2]");
    for (i, c) in coefs.iter().enumerate() {
        println!("a{i} = {c:.10}");
    }
    println!("{:>5} {:>12} {:>12} {:>12}", "x", "f(x)", "P(x)", "abs err");
    for x in [0.0, 0.3, 0.6, 1.0] {
        let fx = f(x);
        let px = evaluate_polynomial(&coefs, x);
        println!("{x:>5.2} {fx:>12.6} {px:>12.6} {:>12.6}", (fx - px).abs());
    }
    println!("rms error (101 control points) = {:.6}\n", rms_error(f, &coefs, 0.0, FRAC_PI_2, 100));

    // quadrature: x·cos³(x)
    let g = |x: f64| x * x.cos().powi(3);
    let (a, b) = (3.5, 6.52968912439344);
    println!("integral of x*cos^3(x) on [{a}, {b}]");
    for rule in [
        QuadratureRule::Midpoint { subdivisions: 100 },
        QuadratureRule::Trapezoid { subdivisions: 100 },
        QuadratureRule::Simpson { subdivisions: 100 },
        QuadratureRule::GaussLegendre { nodes: 3, panels: 10 },
    ] {
        println!("{:<16} = {:.10}", rule.name(), integrate(g, a, b, rule)?);
    }
    let poly = [-2.0, 0.0, -5.0, -9.0, 1.0];
    println!("integral of P(x) = x^4 - 9x^3 - 5x^2 - 2 on [-2, 2]");
    for rule in [
        QuadratureRule::Simpson { subdivisions: 100 },
        QuadratureRule::GaussLegendre { nodes: 3, panels: 10 },
    ] {
        println!("{:<16} = {:.10}", rule.name(), integrate_polynomial(&poly, -2.0, 2.0, rule)?);
    }
    println!();

    // linear system with elimination trace
    let x = solve_linear_system_verbose(&[vec![2.0, 1.0], vec![1.0, 3.0]], &[3.0, 5.0])?;
    println!("solution: {x:?}\n");

    // root finding
    let h = |x: f64| x * x - 2.0;
    let dh = |x: f64| 2.0 * x;
    let options = RootFindingOptions::default();
    let mut trace: Vec<IterationRecord> = Vec::new();
    let root = find_root(h, RootMethod::Bisection { a: 1.0, b: 2.0 }, &options, Some(&mut trace));
    println!("bisection: {root:.12} after {} iterations", trace.len());
    let root = find_root(h, RootMethod::Newton { x0: 1.5, derivative: &dh }, &options, None);
    println!("newton:    {root:.12}\n");

    // ODE y' = y
    let trajectory = integrate_ode(1.0, 0.0, 1.0, 0.01, |_t, y| y, StepMethod::RungeKutta4)?;
    if let Some(last) = trajectory.last() {
        println!("rk4 y(1) = {:.10} (e = {:.10})\n", last.y, std::f64::consts::E);
    }

    // interpolation
    let xs = [0.0, 1.0, 2.0];
    let ys = [1.0, 2.0, 5.0];
    let newton = newton_coefficients(&xs, &ys)?;
    println!("lagrange(1.5) = {}", lagrange(&xs, &ys, 1.5)?);
    println!("newton(1.5)   = {}", newton_evaluate(&newton, &xs, 1.5)?);
    Ok(())
}
