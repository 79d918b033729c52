pub mod application {
    pub mod plant {
        pub mod identify;
    }
}

pub mod domain {
    pub mod logger;
    pub mod plant {
        pub mod errors;
        pub mod extraction;
        pub mod image;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod identify;
        }
    }
}
