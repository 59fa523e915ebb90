pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod numericalerror;
    pub mod tolerance;

    pub mod curve {
        pub mod curve;
        pub mod targetfunction;
    }

    pub mod polynomial {
        pub mod polynomial;
    }

    pub mod quadrature {
        pub mod quadraturerule;
        pub mod newtoncotes;
        pub mod gausslegendre;
        pub mod integrate;
        pub mod quadraturejob;
    }

    pub mod linalg {
        pub mod eliminationobserver;
        pub mod gaussianelimination;
    }

    pub mod approximation {
        pub mod normalequations;
        pub mod leastsquares;
        pub mod approximationjob;
    }

    pub mod interpolation {
        pub mod lagrangepolynomial;
        pub mod newtonpolynomial;
    }

    pub mod rootfinding {
        pub mod rootfinder;
        pub mod bisection;
        pub mod secant;
        pub mod regulafalsi;
        pub mod newton;
    }

    pub mod ode {
        pub mod odestep;
        pub mod odesolver;
    }
}
