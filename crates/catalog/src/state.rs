use crate::{config::ConnectionPool, utils::DependenciesInject};

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let di_container = DependenciesInject::new(pool);

        Self { di_container }
    }
}
