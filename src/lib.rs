pub mod configuration;

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod point2d;
    }

    pub mod quadratic {
        pub mod quadraticerror;
        pub mod coefficientset;
        pub mod range;
        pub mod validator;
        pub mod analyzer;
    }
}

pub mod plot {
    pub mod sampleseries;
    pub mod sampler;
    pub mod annotatedfeature;
    pub mod caption;
    pub mod plotspec;
    pub mod plotspecbuilder;
}

pub mod plotter;

pub mod quadploterror;

pub mod request;
