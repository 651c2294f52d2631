pub mod math {
    pub mod quadrature {
        pub mod quadrature;
        pub mod trapezoidalrule;
        pub mod midpointrule;
        pub mod integrate;
    }
}
