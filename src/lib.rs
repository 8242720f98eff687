pub mod shared {
    pub mod infrastructure {
        pub mod temp_storage;
    }
}

pub mod modules {
    pub mod distribution {
        pub mod core {
            pub mod agent;
            pub mod entry;
            pub mod ports;
            pub mod raw_row;
            pub mod rotation;
        }
        pub mod use_cases {
            pub mod upload_entries {
                pub mod distribute;
                pub mod handler;
                pub mod parse;
                pub mod validate;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_entries {
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_agents {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
            }
        }
    }
}

pub mod shell;
