pub mod application {
    pub mod services;
}

pub mod domain {
    pub mod entities;
    pub mod pagination;
    pub mod repositories;
    pub mod value_objects;
}

pub mod infrastructure {
    pub mod memory;
    pub mod repositories_impl;
    pub mod settings;
}

pub mod interface {
    pub(crate) mod handlers;
    pub mod middleware;
    pub(crate) mod payloads;
    pub mod routers;
}

mod util;
