pub mod application {
    pub mod extraction {
        pub mod extract;
        pub mod in_flight;
    }
    pub mod receipt {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_image;
        pub mod insights;
    }
    pub mod recipe {
        pub mod details;
        pub mod suggest;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod extraction {
        pub mod cache;
        pub mod config;
        pub mod errors;
        pub mod image;
        pub mod model;
        pub mod prompt;
        pub mod scanner;
        pub mod services;
        pub mod use_cases {
            pub mod extract;
        }
    }
    pub mod receipt {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_image;
            pub mod insights;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod details;
            pub mod suggest;
        }
    }
}
