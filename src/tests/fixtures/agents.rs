use std::sync::Arc;

use crate::modules::distribution::adapters::outbound::in_memory::InMemoryStore;
use crate::modules::distribution::core::agent::{Agent, NewAgent};

pub fn new_agent(name: &str) -> NewAgent {
    NewAgent {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0199".to_string(),
    }
}

/// A store holding one agent per name, plus the roster in registration order.
pub async fn seeded_store(names: &[&str]) -> (Arc<InMemoryStore>, Vec<Agent>) {
    let store = Arc::new(InMemoryStore::new());
    let mut roster = Vec::with_capacity(names.len());
    for name in names {
        roster.push(store.register_agent(new_agent(name)).await);
    }
    (store, roster)
}
